//! PPTX (Office Open XML) writer for slide decks.
//!
//! Produces a ZIP archive of XML parts: one slide per [`deck_core::Slide`],
//! themed background, title and bullet text boxes, and a notes page.

mod package;
mod xml;
pub mod writer;

pub use writer::{PptxWriter, PPTX_FILE_NAME};

/// Geometry and namespace constants.
pub mod constants {
    /// EMUs per inch.
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMUs per point.
    pub const EMU_PER_POINT: i64 = 12_700;

    /// 16:9 slide width (10in).
    pub const SLIDE_WIDTH_EMU: i64 = 10 * EMU_PER_INCH;

    /// 16:9 slide height (5.625in).
    pub const SLIDE_HEIGHT_EMU: i64 = 5_143_500;

    /// Portrait notes page width (7.5in).
    pub const NOTES_WIDTH_EMU: i64 = 6_858_000;

    /// Portrait notes page height (10in).
    pub const NOTES_HEIGHT_EMU: i64 = 9_144_000;

    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const REL_TYPE_NOTES_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
    pub const REL_TYPE_NOTES_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

#[cfg(test)]
mod tests {
    use super::constants::*;

    #[test]
    fn test_widescreen_geometry() {
        let ratio = SLIDE_WIDTH_EMU as f64 / SLIDE_HEIGHT_EMU as f64;
        assert!((ratio - 16.0 / 9.0).abs() < 0.001);
        assert_eq!(EMU_PER_INCH, 72 * EMU_PER_POINT);
    }
}
