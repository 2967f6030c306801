//! Gemini `generateContent` client.

use crate::config::GenaiConfig;
use async_trait::async_trait;
use deck_core::{Error, GenerationError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A model that answers a prompt under a declared JSON response schema.
#[async_trait]
pub trait ContentModel: Send + Sync {
    /// Return the raw response text for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> std::result::Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn request_body<'a>(prompt: &'a str, schema: &'a Value) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: schema,
        },
    }
}

/// Client for the Gemini REST API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GenaiConfig,
}

impl GeminiClient {
    /// Build a client. Fails if the HTTP client cannot be constructed.
    pub fn new(config: GenaiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(GenaiConfig::from_env()?)
    }

    /// Configured model name.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl ContentModel for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> std::result::Result<String, GenerationError> {
        let body = request_body(prompt, schema);
        log::debug!(
            "POST {} (prompt {} chars)",
            self.endpoint(),
            prompt.chars().count()
        );

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            log::warn!("Gemini returned HTTP {}: {}", status, text);
            return Err(GenerationError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        let response: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let text = response.text();
        if text.is_empty() {
            log::warn!("Gemini response had no text candidates");
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Answer one HTTP request on a local port with a canned response.
    /// Returns the base URL and a receiver for the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&request[..end]).to_ascii_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(String::from_utf8_lossy(&request).to_string());
        });

        (format!("http://{}", addr), rx)
    }

    fn client_for(base_url: String) -> GeminiClient {
        let mut config = GenaiConfig::new("test-key");
        config.base_url = base_url;
        GeminiClient::new(config).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let schema = deck_core::response_schema();
        let body = serde_json::to_value(request_body("Make slides", &schema)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Make slides");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "[{\"title\":"}, {"text": "\"A\"}]"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), "[{\"title\":\"A\"}]");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert_eq!(response.text(), "");

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_endpoint_uses_model() {
        let mut config = GenaiConfig::new("key");
        config.base_url = "http://localhost:9".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/models/gemini-2.5-flash:generateContent"
        );
        assert_eq!(client.model(), "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let (url, requests) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"[]"}],"role":"model"}}]}"#,
        );
        let client = client_for(url);
        let schema = deck_core::response_schema();

        let text = client.generate("Make slides", &schema).await.unwrap();
        assert_eq!(text, "[]");

        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /models/gemini-2.5-flash:generateContent "));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("\"responseMimeType\":\"application/json\""));
    }

    #[tokio::test]
    async fn test_generate_maps_error_status_to_service() {
        let (url, _requests) = serve_once("500 Internal Server Error", "oops");
        let client = client_for(url);

        let err = client
            .generate("Make slides", &deck_core::response_schema())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Service {
                status: 500,
                body: "oops".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_generate_maps_undecodable_body_to_malformed() {
        let (url, _requests) = serve_once("200 OK", "not json");
        let client = client_for(url);

        let err = client
            .generate("Make slides", &deck_core::response_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_maps_connection_failure_to_request() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = client_for(format!("http://127.0.0.1:{}", port));

        let err = client
            .generate("Make slides", &deck_core::response_schema())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Request(_)));
        assert_eq!(
            err.user_message(),
            "Failed to parse response from AI. Please try again."
        );
    }
}
