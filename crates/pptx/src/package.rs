//! Fixed package parts: content types, relationships, properties, theme,
//! slide master, layout and notes master.

use crate::constants::*;
use deck_core::theme::{hex_rgb, primary_face};
use deck_core::Theme;
use crate::xml::xml_text;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_NOTES_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";

/// `[Content_Types].xml`
pub(crate) fn content_types(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_HEADER}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/theme/theme2.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/notesMasters/notesMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#
    );

    for i in 1..=slide_count {
        xml.push_str(&format!(
            "  <Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"{CT_SLIDE}\"/>\n"
        ));
        xml.push_str(&format!(
            "  <Override PartName=\"/ppt/notesSlides/notesSlide{i}.xml\" ContentType=\"{CT_NOTES_SLIDE}\"/>\n"
        ));
    }

    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub(crate) fn root_rels() -> String {
    format!(
        r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

/// `docProps/app.xml`
pub(crate) fn app_props(slide_count: usize) -> String {
    format!(
        r#"{XML_HEADER}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Application>deckgen</Application>
  <PresentationFormat>On-screen Show (16:9)</PresentationFormat>
  <Slides>{slide_count}</Slides>
  <Notes>{slide_count}</Notes>
  <HiddenSlides>0</HiddenSlides>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#
    )
}

/// `docProps/core.xml`
pub(crate) fn core_props(title: &str) -> String {
    format!(
        r#"{XML_HEADER}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>deckgen</dc:creator>
  <cp:lastModifiedBy>deckgen</cp:lastModifiedBy>
</cp:coreProperties>"#,
        xml_text(title)
    )
}

/// `ppt/presentation.xml`. Slides are `rId7..`, see [`presentation_rels`].
pub(crate) fn presentation(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for i in 1..=slide_count {
        slide_ids.push_str(&format!(
            "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
            255 + i,
            FIRST_SLIDE_REL + i - 1
        ));
    }

    format!(
        r#"{XML_HEADER}
<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:notesMasterIdLst>
    <p:notesMasterId r:id="rId6"/>
  </p:notesMasterIdLst>
  <p:sldIdLst>
{slide_ids}  </p:sldIdLst>
  <p:sldSz cx="{SLIDE_WIDTH_EMU}" cy="{SLIDE_HEIGHT_EMU}"/>
  <p:notesSz cx="{NOTES_WIDTH_EMU}" cy="{NOTES_HEIGHT_EMU}"/>
</p:presentation>"#
    )
}

/// Relationship id of the first slide in `presentation.xml.rels`.
pub(crate) const FIRST_SLIDE_REL: usize = 7;

/// `ppt/_rels/presentation.xml.rels`
pub(crate) fn presentation_rels(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps" Target="viewProps.xml"/>
  <Relationship Id="rId4" Type="{REL_TYPE_THEME}" Target="theme/theme1.xml"/>
  <Relationship Id="rId5" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles" Target="tableStyles.xml"/>
  <Relationship Id="rId6" Type="{REL_TYPE_NOTES_MASTER}" Target="notesMasters/notesMaster1.xml"/>
"#
    );

    for i in 1..=slide_count {
        xml.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{REL_TYPE_SLIDE}\" Target=\"slides/slide{i}.xml\"/>\n",
            FIRST_SLIDE_REL + i - 1
        ));
    }

    xml.push_str("</Relationships>");
    xml
}

/// `ppt/presProps.xml`
pub(crate) fn pres_props() -> String {
    format!(
        r#"{XML_HEADER}
<p:presentationPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}"/>"#
    )
}

/// `ppt/viewProps.xml`
pub(crate) fn view_props() -> String {
    format!(
        r#"{XML_HEADER}
<p:viewPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
</p:viewPr>"#
    )
}

/// `ppt/tableStyles.xml`
pub(crate) fn table_styles() -> String {
    format!(
        r#"{XML_HEADER}
<a:tblStyleLst xmlns:a="{NS_DRAWING}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

/// `ppt/theme/themeN.xml`, built from the deck theme's colours and fonts.
pub(crate) fn theme(theme: &Theme) -> String {
    let bg = hex_rgb(&theme.bg);
    let text = hex_rgb(&theme.text);
    let title = hex_rgb(&theme.title);
    let accent = hex_rgb(&theme.accent);
    let major = xml_text(&primary_face(&theme.font.title));
    let minor = xml_text(&primary_face(&theme.font.body));
    let name = xml_text(&theme.name);

    format!(
        r#"{XML_HEADER}
<a:theme xmlns:a="{NS_DRAWING}" name="{name}">
  <a:themeElements>
    <a:clrScheme name="{name}">
      <a:dk1><a:srgbClr val="{text}"/></a:dk1>
      <a:lt1><a:srgbClr val="{bg}"/></a:lt1>
      <a:dk2><a:srgbClr val="{title}"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="{accent}"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="{name}">
      <a:majorFont>
        <a:latin typeface="{major}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="{minor}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="{name}">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#
    )
}

const CLR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;

const EMPTY_GROUP: &str = r#"<p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>"#;

/// `ppt/slideMasters/slideMaster1.xml`
pub(crate) fn slide_master() -> String {
    format!(
        r#"{XML_HEADER}
<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef>
    </p:bg>
    <p:spTree>
      {EMPTY_GROUP}
    </p:spTree>
  </p:cSld>
  <p:clrMap {CLR_MAP}/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#
    )
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`
pub(crate) fn slide_master_rels() -> String {
    format!(
        r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_THEME}" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

/// `ppt/slideLayouts/slideLayout1.xml`: a blank layout; slides carry their
/// own text boxes.
pub(crate) fn slide_layout() -> String {
    format!(
        r#"{XML_HEADER}
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      {EMPTY_GROUP}
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`
pub(crate) fn slide_layout_rels() -> String {
    format!(
        r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

/// `ppt/notesMasters/notesMaster1.xml`
pub(crate) fn notes_master() -> String {
    format!(
        r#"{XML_HEADER}
<p:notesMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef>
    </p:bg>
    <p:spTree>
      {EMPTY_GROUP}
    </p:spTree>
  </p:cSld>
  <p:clrMap {CLR_MAP}/>
</p:notesMaster>"#
    )
}

/// `ppt/notesMasters/_rels/notesMaster1.xml.rels`
pub(crate) fn notes_master_rels() -> String {
    format!(
        r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_THEME}" Target="../theme/theme2.xml"/>
</Relationships>"#
    )
}
