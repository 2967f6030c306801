//! Print-formatted HTML view of a deck.
//!
//! One landscape page per slide, themed like the editor. Opening the file in
//! a browser and printing it ("Save as PDF") produces the PDF export.

use crate::theme::Theme;
use crate::types::Slide;

/// Default file name for the print view.
pub const PRINT_FILE_NAME: &str = "presentation.html";

/// Render every slide into a standalone, printable HTML document.
pub fn render_print_html(slides: &[Slide], theme: &Theme) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Presentation</title>
<style>
@page {{ size: landscape; margin: 0; }}
body {{ margin: 0; }}
.slide-print {{
  box-sizing: border-box;
  width: 100vw;
  height: 100vh;
  padding: 48px 64px;
  page-break-after: always;
  break-after: page;
  background-color: {bg};
  color: {text};
  -webkit-print-color-adjust: exact;
  print-color-adjust: exact;
}}
.slide-print:last-child {{ page-break-after: auto; break-after: auto; }}
.slide-print h1 {{ font-size: 3rem; font-weight: bold; margin: 0 0 2rem 0; color: {title}; font-family: {title_font}; }}
.slide-print ul {{ font-size: 1.5rem; list-style: disc; padding-left: 3rem; font-family: {body_font}; }}
.slide-print li {{ margin-bottom: 1rem; }}
.slide-print li::marker {{ color: {accent}; }}
</style>
</head>
<body>
"#,
        bg = escape_html(&theme.bg),
        text = escape_html(&theme.text),
        title = escape_html(&theme.title),
        accent = escape_html(&theme.accent),
        title_font = escape_html(&theme.font.title),
        body_font = escape_html(&theme.font.body),
    );

    for slide in slides {
        html.push_str("<section class=\"slide-print\">\n");
        html.push_str(&format!("  <h1>{}</h1>\n", escape_html(&slide.title)));
        if !slide.content.is_empty() {
            html.push_str("  <ul>\n");
            for point in &slide.content {
                html.push_str(&format!("    <li>{}</li>\n", escape_html(point)));
            }
            html.push_str("  </ul>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
