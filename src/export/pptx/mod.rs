//! Slide-deck (PPTX) export adapter.
//!
//! Realizes the composed instruction stream as an OPC package. Layout
//! inches convert to EMU (914400 per inch); text arrives pre-wrapped, so
//! every text shape disables autofit and re-wrapping and pins its line
//! spacing to the style's fixed advance, keeping deck geometry identical to
//! the fixed-page output.

pub mod package;

use std::io::Cursor;

use log::warn;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::compose::{DrawOp, TextAlign, TextStyle};
use crate::error::{Error, Result};
use crate::export::media::{self, EmbeddedImage};
use crate::geometry::{fit_rect, Rect};
use crate::metrics::{self, FontWeight};
use crate::model::Slide;

use package::OpcPackage;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

const EMU_PER_INCH: f64 = 914_400.0;

/// Render a composed instruction stream against its slide snapshot.
pub fn render(slides: &[Slide], ops: &[DrawOp]) -> Result<Vec<u8>> {
    let pages = split_pages(ops);
    let mut media_parts: Vec<EmbeddedImage> = Vec::new();
    let mut slide_parts: Vec<(Vec<u8>, String)> = Vec::new();

    for page in &pages {
        let part = build_slide(slides, page, &mut media_parts)?;
        slide_parts.push(part);
    }

    let mut pkg = OpcPackage::new();
    pkg.add_part("[Content_Types].xml", content_types(slide_parts.len()).as_bytes())?;
    pkg.add_part("_rels/.rels", ROOT_RELS.as_bytes())?;
    pkg.add_part("ppt/presentation.xml", presentation_xml(slide_parts.len()).as_bytes())?;
    pkg.add_part(
        "ppt/_rels/presentation.xml.rels",
        presentation_rels(slide_parts.len()).as_bytes(),
    )?;
    pkg.add_part("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
    pkg.add_part("ppt/slideMasters/_rels/slideMaster1.xml.rels", MASTER_RELS.as_bytes())?;
    pkg.add_part("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT.as_bytes())?;
    pkg.add_part("ppt/slideLayouts/_rels/slideLayout1.xml.rels", LAYOUT_RELS.as_bytes())?;
    pkg.add_part("ppt/theme/theme1.xml", THEME.as_bytes())?;

    for (i, (xml, rels)) in slide_parts.iter().enumerate() {
        pkg.add_part(&format!("ppt/slides/slide{}.xml", i + 1), xml)?;
        pkg.add_part(&format!("ppt/slides/_rels/slide{}.xml.rels", i + 1), rels.as_bytes())?;
    }
    for (i, image) in media_parts.iter().enumerate() {
        pkg.add_part(&format!("ppt/media/image{}.jpg", i + 1), &image.jpeg)?;
    }

    pkg.add_part("docProps/core.xml", core_xml().as_bytes())?;
    pkg.add_part("docProps/app.xml", app_xml(slide_parts.len()).as_bytes())?;
    pkg.finish()
}

/// Split the stream into per-slide groups at `NewPage` boundaries.
fn split_pages(ops: &[DrawOp]) -> Vec<Vec<&DrawOp>> {
    let mut pages = vec![Vec::new()];
    for op in ops {
        match op {
            DrawOp::NewPage => pages.push(Vec::new()),
            other => pages.last_mut().unwrap().push(other),
        }
    }
    pages
}

fn emu(inches: f32) -> String {
    ((inches as f64 * EMU_PER_INCH).round() as i64).to_string()
}

type Xml = Writer<Cursor<Vec<u8>>>;

fn start(w: &mut Xml, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for (k, v) in attrs {
        el.push_attribute((*k, *v));
    }
    w.write_event(Event::Start(el))?;
    Ok(())
}

fn empty(w: &mut Xml, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for (k, v) in attrs {
        el.push_attribute((*k, *v));
    }
    w.write_event(Event::Empty(el))?;
    Ok(())
}

fn end(w: &mut Xml, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_xfrm(w: &mut Xml, rect: Rect) -> Result<()> {
    start(w, "a:xfrm", &[])?;
    empty(w, "a:off", &[("x", emu(rect.x).as_str()), ("y", emu(rect.y).as_str())])?;
    empty(w, "a:ext", &[("cx", emu(rect.width).as_str()), ("cy", emu(rect.height).as_str())])?;
    end(w, "a:xfrm")
}

fn write_rect_geom(w: &mut Xml) -> Result<()> {
    start(w, "a:prstGeom", &[("prst", "rect")])?;
    empty(w, "a:avLst", &[])?;
    end(w, "a:prstGeom")
}

/// Build one slide part plus its relationships.
///
/// Media discovered on this slide is appended to the shared `media_parts`
/// pool; relationship ids restart at `rId2` per slide (`rId1` is the layout).
fn build_slide(
    slides: &[Slide],
    ops: &[&DrawOp],
    media_parts: &mut Vec<EmbeddedImage>,
) -> Result<(Vec<u8>, String)> {
    let mut w = Writer::new(Cursor::new(Vec::new()));
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    start(
        &mut w,
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    start(&mut w, "p:cSld", &[])?;
    start(&mut w, "p:spTree", &[])?;

    start(&mut w, "p:nvGrpSpPr", &[])?;
    empty(&mut w, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    empty(&mut w, "p:cNvGrpSpPr", &[])?;
    empty(&mut w, "p:nvPr", &[])?;
    end(&mut w, "p:nvGrpSpPr")?;
    start(&mut w, "p:grpSpPr", &[])?;
    start(&mut w, "a:xfrm", &[])?;
    empty(&mut w, "a:off", &[("x", "0"), ("y", "0")])?;
    empty(&mut w, "a:ext", &[("cx", "0"), ("cy", "0")])?;
    empty(&mut w, "a:chOff", &[("x", "0"), ("y", "0")])?;
    empty(&mut w, "a:chExt", &[("cx", "0"), ("cy", "0")])?;
    end(&mut w, "a:xfrm")?;
    end(&mut w, "p:grpSpPr")?;

    let mut rels: Vec<(String, String)> = Vec::new(); // (rel id, media target)
    let mut shape_id = 2u32;
    let mut style: Option<TextStyle> = None;

    for op in ops {
        match op {
            DrawOp::NewPage => unreachable!("pages were split on boundaries"),
            DrawOp::PlaceImage { rect, fit, image } => {
                let slide = slides.get(image.0).ok_or_else(|| {
                    Error::Export(format!("instruction references missing slide {}", image.0))
                })?;
                match media::prepare(&slide.image) {
                    Ok(prepared) => {
                        let dest = fit_rect(prepared.width, prepared.height, *rect, *fit);
                        media_parts.push(prepared);
                        let rel_id = format!("rId{}", rels.len() + 2);
                        let target = format!("../media/image{}.jpg", media_parts.len());
                        rels.push((rel_id.clone(), target));
                        write_picture(&mut w, shape_id, &rel_id, dest)?;
                        shape_id += 1;
                    },
                    Err(err) => {
                        warn!("skipping unreadable image for slide {}: {err}", image.0 + 1)
                    },
                }
            },
            DrawOp::FillRect { rect, color, opacity } => {
                write_fill_rect(&mut w, shape_id, *rect, color.to_hex().as_str(), *opacity)?;
                shape_id += 1;
            },
            DrawOp::SetTextStyle(new_style) => style = Some(*new_style),
            DrawOp::DrawTextBlock {
                origin,
                lines,
                width,
                align,
            } => {
                let style = style
                    .ok_or_else(|| Error::Export("text block precedes any text style".to_string()))?;
                write_text_shape(&mut w, shape_id, origin.x, origin.y, *width, lines, *align, style)?;
                shape_id += 1;
            },
        }
    }

    end(&mut w, "p:spTree")?;
    end(&mut w, "p:cSld")?;
    start(&mut w, "p:clrMapOvr", &[])?;
    empty(&mut w, "a:masterClrMapping", &[])?;
    end(&mut w, "p:clrMapOvr")?;
    end(&mut w, "p:sld")?;

    Ok((w.into_inner().into_inner(), slide_rels(&rels)))
}

fn write_picture(w: &mut Xml, id: u32, rel_id: &str, dest: Rect) -> Result<()> {
    let id_attr = id.to_string();
    let name = format!("Image {}", id - 1);
    start(w, "p:pic", &[])?;
    start(w, "p:nvPicPr", &[])?;
    empty(w, "p:cNvPr", &[("id", id_attr.as_str()), ("name", name.as_str())])?;
    empty(w, "p:cNvPicPr", &[])?;
    empty(w, "p:nvPr", &[])?;
    end(w, "p:nvPicPr")?;
    start(w, "p:blipFill", &[])?;
    empty(w, "a:blip", &[("r:embed", rel_id)])?;
    start(w, "a:stretch", &[])?;
    empty(w, "a:fillRect", &[])?;
    end(w, "a:stretch")?;
    end(w, "p:blipFill")?;
    start(w, "p:spPr", &[])?;
    write_xfrm(w, dest)?;
    write_rect_geom(w)?;
    end(w, "p:spPr")?;
    end(w, "p:pic")
}

fn write_fill_rect(w: &mut Xml, id: u32, rect: Rect, hex: &str, opacity: f32) -> Result<()> {
    let id_attr = id.to_string();
    let alpha = ((opacity as f64) * 100_000.0).round() as i64;
    let alpha_attr = alpha.to_string();

    start(w, "p:sp", &[])?;
    start(w, "p:nvSpPr", &[])?;
    empty(w, "p:cNvPr", &[("id", id_attr.as_str()), ("name", "Overlay")])?;
    empty(w, "p:cNvSpPr", &[])?;
    empty(w, "p:nvPr", &[])?;
    end(w, "p:nvSpPr")?;
    start(w, "p:spPr", &[])?;
    write_xfrm(w, rect)?;
    write_rect_geom(w)?;
    start(w, "a:solidFill", &[])?;
    if alpha < 100_000 {
        start(w, "a:srgbClr", &[("val", hex)])?;
        empty(w, "a:alpha", &[("val", alpha_attr.as_str())])?;
        end(w, "a:srgbClr")?;
    } else {
        empty(w, "a:srgbClr", &[("val", hex)])?;
    }
    end(w, "a:solidFill")?;
    start(w, "a:ln", &[])?;
    empty(w, "a:noFill", &[])?;
    end(w, "a:ln")?;
    end(w, "p:spPr")?;
    start(w, "p:txBody", &[])?;
    empty(w, "a:bodyPr", &[])?;
    empty(w, "a:lstStyle", &[])?;
    start(w, "a:p", &[])?;
    empty(w, "a:endParaRPr", &[("lang", "en-US")])?;
    end(w, "a:p")?;
    end(w, "p:txBody")?;
    end(w, "p:sp")
}

#[allow(clippy::too_many_arguments)]
fn write_text_shape(
    w: &mut Xml,
    id: u32,
    x: f32,
    baseline_y: f32,
    width: f32,
    lines: &[String],
    align: TextAlign,
    style: TextStyle,
) -> Result<()> {
    let id_attr = id.to_string();
    // The composer positions blocks by first-line baseline; shapes anchor at
    // their top edge, one ascent above it.
    let top = baseline_y - metrics::ascent(style.size) / 72.0;
    let height = lines.len() as f32 * style.line_advance + 0.35 * style.size / 72.0;
    let box_rect = Rect::new(x, top, width, height);

    let algn = match align {
        TextAlign::Left => "l",
        TextAlign::Center => "ctr",
    };
    let size_attr = ((style.size * 100.0).round() as i64).to_string();
    let bold_attr = match style.weight {
        FontWeight::Regular => "0",
        FontWeight::Bold => "1",
    };
    let spacing_attr = ((style.line_advance * 7200.0).round() as i64).to_string();
    let hex = style.color.to_hex();

    start(w, "p:sp", &[])?;
    start(w, "p:nvSpPr", &[])?;
    empty(w, "p:cNvPr", &[("id", id_attr.as_str()), ("name", "Text")])?;
    empty(w, "p:cNvSpPr", &[("txBox", "1")])?;
    empty(w, "p:nvPr", &[])?;
    end(w, "p:nvSpPr")?;
    start(w, "p:spPr", &[])?;
    write_xfrm(w, box_rect)?;
    write_rect_geom(w)?;
    empty(w, "a:noFill", &[])?;
    end(w, "p:spPr")?;

    start(w, "p:txBody", &[])?;
    empty(
        w,
        "a:bodyPr",
        &[
            ("wrap", "none"),
            ("lIns", "0"),
            ("tIns", "0"),
            ("rIns", "0"),
            ("bIns", "0"),
            ("anchor", "t"),
        ],
    )?;
    empty(w, "a:lstStyle", &[])?;

    for line in lines {
        start(w, "a:p", &[])?;
        start(w, "a:pPr", &[("algn", algn)])?;
        start(w, "a:lnSpc", &[])?;
        empty(w, "a:spcPts", &[("val", spacing_attr.as_str())])?;
        end(w, "a:lnSpc")?;
        end(w, "a:pPr")?;
        start(w, "a:r", &[])?;
        start(
            w,
            "a:rPr",
            &[
                ("lang", "en-US"),
                ("sz", size_attr.as_str()),
                ("b", bold_attr),
                ("dirty", "0"),
            ],
        )?;
        start(w, "a:solidFill", &[])?;
        empty(w, "a:srgbClr", &[("val", hex.as_str())])?;
        end(w, "a:solidFill")?;
        empty(w, "a:latin", &[("typeface", "Helvetica")])?;
        end(w, "a:rPr")?;
        start(w, "a:t", &[])?;
        w.write_event(Event::Text(BytesText::new(line)))?;
        end(w, "a:t")?;
        end(w, "a:r")?;
        end(w, "a:p")?;
    }

    end(w, "p:txBody")?;
    end(w, "p:sp")
}

// ---------------------------------------------------------------------------
// Fixed and templated package parts
// ---------------------------------------------------------------------------

fn content_types(slide_count: usize) -> String {
    let mut overrides = String::new();
    for i in 1..=slide_count {
        overrides.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="jpg" ContentType="image/jpeg"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>{overrides}</Types>"#
    )
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

fn presentation_xml(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for i in 0..slide_count {
        slide_ids.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            i + 2
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>{slide_ids}</p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let mut rels = String::from(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
    );
    for i in 0..slide_count {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i + 2,
            i + 1
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    )
}

fn slide_rels(media: &[(String, String)]) -> String {
    let mut rels = String::from(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
    );
    for (id, target) in media {
        rels.push_str(&format!(
            r#"<Relationship Id="{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="{target}"/>"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    )
}

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#;

const MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Minimal"><a:themeElements><a:clrScheme name="Minimal"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="0F172A"/></a:dk2><a:lt2><a:srgbClr val="F1F5F9"/></a:lt2><a:accent1><a:srgbClr val="4F46E5"/></a:accent1><a:accent2><a:srgbClr val="0EA5E9"/></a:accent2><a:accent3><a:srgbClr val="22C55E"/></a:accent3><a:accent4><a:srgbClr val="EAB308"/></a:accent4><a:accent5><a:srgbClr val="EF4444"/></a:accent5><a:accent6><a:srgbClr val="A855F7"/></a:accent6><a:hlink><a:srgbClr val="2563EB"/></a:hlink><a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink></a:clrScheme><a:fontScheme name="Minimal"><a:majorFont><a:latin typeface="Helvetica"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Helvetica"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Minimal"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;

fn core_xml() -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>Presentation</dc:title><dc:creator>slidesmith</dc:creator><cp:lastModifiedBy>slidesmith</cp:lastModifiedBy><dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified></cp:coreProperties>"#
    )
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>slidesmith</Application><Slides>{slide_count}</Slides><PresentationFormat>Widescreen</PresentationFormat></Properties>"#
    )
}
