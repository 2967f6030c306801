//! PPTX generation from slides and a theme.

use crate::constants::*;
use crate::package;
use crate::xml::{xml_text, SOFT_BREAK};
use deck_core::theme::{hex_rgb, primary_face};
use deck_core::{Error, Result, Slide, Theme};
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

/// Default download name for PPTX exports.
pub const PPTX_FILE_NAME: &str = "AI_Presentation.pptx";

/// Title box: 0.5in from the left, 0.25in from the top, 90% wide, 1in tall.
const TITLE_BOX: TextBox = TextBox {
    x: EMU_PER_INCH / 2,
    y: EMU_PER_INCH / 4,
    cx: SLIDE_WIDTH_EMU * 9 / 10,
    cy: EMU_PER_INCH,
};

/// Content box: 0.75in from the left, 1.5in from the top, 85% wide, 4in tall.
const CONTENT_BOX: TextBox = TextBox {
    x: EMU_PER_INCH * 3 / 4,
    y: EMU_PER_INCH * 3 / 2,
    cx: SLIDE_WIDTH_EMU * 85 / 100,
    cy: EMU_PER_INCH * 4,
};

/// Font sizes in hundredths of a point.
const TITLE_SIZE: u32 = 3600;
const BODY_SIZE: u32 = 2000;

/// Bullet indent (30pt).
const BULLET_INDENT_EMU: i64 = 30 * EMU_PER_POINT;

#[derive(Debug, Clone, Copy)]
struct TextBox {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

/// PPTX document writer.
pub struct PptxWriter {
    /// Colours and fonts for every slide.
    theme: Theme,

    /// Slides to render, in order.
    slides: Vec<Slide>,

    /// Presentation title for the document properties.
    title: Option<String>,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl PptxWriter {
    /// Create a writer that renders with `theme`.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            slides: Vec::new(),
            title: None,
        }
    }

    /// Set the document title. Defaults to the first slide's title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append one slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Append slides in order.
    pub fn add_slides(&mut self, slides: impl IntoIterator<Item = Slide>) {
        self.slides.extend(slides);
    }

    /// Generate the PPTX as bytes.
    pub fn generate(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let count = self.slides.len();
        let title = self
            .title
            .clone()
            .or_else(|| self.slides.first().map(|s| s.title.clone()))
            .unwrap_or_else(|| "Presentation".to_string());

        let theme_xml = package::theme(&self.theme);
        let parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".into(), package::content_types(count)),
            ("_rels/.rels".into(), package::root_rels()),
            ("docProps/app.xml".into(), package::app_props(count)),
            ("docProps/core.xml".into(), package::core_props(&title)),
            ("ppt/presentation.xml".into(), package::presentation(count)),
            (
                "ppt/_rels/presentation.xml.rels".into(),
                package::presentation_rels(count),
            ),
            ("ppt/presProps.xml".into(), package::pres_props()),
            ("ppt/viewProps.xml".into(), package::view_props()),
            ("ppt/tableStyles.xml".into(), package::table_styles()),
            ("ppt/theme/theme1.xml".into(), theme_xml.clone()),
            ("ppt/theme/theme2.xml".into(), theme_xml),
            (
                "ppt/slideMasters/slideMaster1.xml".into(),
                package::slide_master(),
            ),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
                package::slide_master_rels(),
            ),
            (
                "ppt/slideLayouts/slideLayout1.xml".into(),
                package::slide_layout(),
            ),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
                package::slide_layout_rels(),
            ),
            (
                "ppt/notesMasters/notesMaster1.xml".into(),
                package::notes_master(),
            ),
            (
                "ppt/notesMasters/_rels/notesMaster1.xml.rels".into(),
                package::notes_master_rels(),
            ),
        ];

        for (path, content) in &parts {
            write_part(&mut zip, options, path, content)?;
        }

        for (i, slide) in self.slides.iter().enumerate() {
            let number = i + 1;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/slide{}.xml", number),
                &self.slide_xml(slide),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &slide_rels(number),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/notesSlides/notesSlide{}.xml", number),
                &notes_xml(&slide.notes),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
                &notes_rels(number),
            )?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::Export(format!("Failed to finish PPTX archive: {}", e)))?;
        log::debug!("Generated PPTX with {} slides", count);
        Ok(cursor.into_inner())
    }

    /// Generate and write the PPTX to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let bytes = self.generate()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Slide XML: themed background, title box, bulleted content box.
    fn slide_xml(&self, slide: &Slide) -> String {
        let theme = &self.theme;
        let title_face = xml_text(&primary_face(&theme.font.title));
        let body_face = xml_text(&primary_face(&theme.font.body));
        let title_colour = hex_rgb(&theme.title);
        let text_colour = hex_rgb(&theme.text);

        let title_paragraph = if slide.title.is_empty() {
            "<a:p><a:pPr algn=\"ctr\"/><a:endParaRPr lang=\"en-US\"/></a:p>".to_string()
        } else {
            format!(
                "<a:p><a:pPr algn=\"ctr\"/>{}</a:p>",
                runs_xml(
                    &slide.title,
                    &run_properties(TITLE_SIZE, true, &title_colour, &title_face)
                )
            )
        };

        let body_properties = run_properties(BODY_SIZE, false, &text_colour, &body_face);
        let mut bullet_paragraphs = String::new();
        for point in &slide.content {
            bullet_paragraphs.push_str(&format!(
                "<a:p><a:pPr marL=\"{indent}\" indent=\"-{indent}\"><a:buFont typeface=\"Arial\"/><a:buChar char=\"&#8226;\"/></a:pPr>{}</a:p>",
                runs_xml(point, &body_properties),
                indent = BULLET_INDENT_EMU,
            ));
        }
        if bullet_paragraphs.is_empty() {
            bullet_paragraphs.push_str("<a:p><a:endParaRPr lang=\"en-US\"/></a:p>");
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{title}{content}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            bg = hex_rgb(&theme.bg),
            title = text_box_xml(2, "Title", TITLE_BOX, "ctr", &title_paragraph),
            content = text_box_xml(3, "Content", CONTENT_BOX, "t", &bullet_paragraphs),
        )
    }
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(path, options)
        .map_err(|e| Error::Export(format!("Failed to add '{}' to PPTX: {}", path, e)))?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

/// Text runs for one paragraph. Vertical tab is a soft line break.
fn runs_xml(text: &str, properties: &str) -> String {
    text.split(SOFT_BREAK)
        .map(|segment| {
            format!(
                "<a:r>{}<a:t>{}</a:t></a:r>",
                properties,
                xml_text(segment)
            )
        })
        .collect::<Vec<_>>()
        .join("<a:br/>")
}

fn run_properties(size: u32, bold: bool, colour: &str, face: &str) -> String {
    format!(
        "<a:rPr lang=\"en-US\" sz=\"{}\"{} dirty=\"0\"><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill><a:latin typeface=\"{}\"/></a:rPr>",
        size,
        if bold { " b=\"1\"" } else { "" },
        colour,
        face
    )
}

fn text_box_xml(id: u32, name: &str, frame: TextBox, anchor: &str, paragraphs: &str) -> String {
    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{}" y="{}"/>
            <a:ext cx="{}" cy="{}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" rtlCol="0" anchor="{anchor}"><a:normAutofit/></a:bodyPr>
          <a:lstStyle/>
          {paragraphs}
        </p:txBody>
      </p:sp>
"#,
        frame.x, frame.y, frame.cx, frame.cy
    )
}

fn slide_rels(number: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_NOTES_SLIDE}" Target="../notesSlides/notesSlide{number}.xml"/>
</Relationships>"#
    )
}

/// Notes page: slide image placeholder plus one paragraph per notes line.
fn notes_xml(notes: &str) -> String {
    let paragraphs: String = if notes.is_empty() {
        "<a:p><a:endParaRPr lang=\"en-US\"/></a:p>".to_string()
    } else {
        notes
            .lines()
            .map(|line| {
                format!(
                    "<a:p>{}</a:p>",
                    runs_xml(line, "<a:rPr lang=\"en-US\" dirty=\"0\"/>")
                )
            })
            .collect()
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Slide Image Placeholder 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="sldImg"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Notes Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="body" idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          {paragraphs}
        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:notes>"#
    )
}

fn notes_rels(number: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_NOTES_MASTER}" Target="../notesMasters/notesMaster1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_SLIDE}" Target="../slides/slide{number}.xml"/>
</Relationships>"#
    )
}
