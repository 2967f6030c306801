//! Text escaping for XML parts.

use quick_xml::escape::escape;

/// PowerPoint's soft line break (`Shift+Enter`) inside a paragraph.
pub(crate) const SOFT_BREAK: char = '\u{0B}';

/// Escape `text` for an XML text node or attribute, dropping characters
/// XML 1.0 forbids.
pub(crate) fn xml_text(text: &str) -> String {
    let allowed: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    escape(&allowed).into_owned()
}

/// The XML 1.0 `Char` production.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
