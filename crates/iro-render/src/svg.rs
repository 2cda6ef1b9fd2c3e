//! SVG card writer.
//!
//! Output is a standalone SVG 1.1 document: XML prolog, public DOCTYPE, one
//! full-canvas `rect` and two `text` labels with inline styles.
//!
//! ```text
//! <?xml version="1.0" standalone="no"?>
//! <!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
//! "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
//! <svg width="200" height="300" version="1.1" xmlns="http://www.w3.org/2000/svg">...
//! ```

use crate::error::{RenderError, RenderResult};
use crate::layout::{CardLayout, CANVAS_HEIGHT, CANVAS_WIDTH};
use iro_core::EnrichedColor;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// File extension of generated cards.
pub const EXTENSION: &str = "svg";

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const DOCTYPE: &str =
    "svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\"\n\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\"";
const KANJI_FONT: &str = "osaka, sans-serif";
const ROMANJI_FONT: &str = "-apple-system, BlinkMacSystemFont,\"Helvetica Neue\", sans-serif";
const LABEL_FILL: &str = "white";

/// Writes the card for `color` to any writer.
pub fn write_card_to<W: Write>(writer: W, color: &EnrichedColor) -> RenderResult<()> {
    let layout = CardLayout::for_color(color);
    let mut xml = Writer::new(writer);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", None, Some("no"))))
        .map_err(xml_err)?;
    newline(&mut xml)?;
    xml.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))
        .map_err(xml_err)?;
    newline(&mut xml)?;

    let width = CANVAS_WIDTH.to_string();
    let height = CANVAS_HEIGHT.to_string();

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("version", "1.1"));
    svg.push_attribute(("xmlns", SVG_NS));
    xml.write_event(Event::Start(svg)).map_err(xml_err)?;

    let fill = color.css_rgb();
    let mut rect = BytesStart::new("rect");
    rect.push_attribute(("x", "0"));
    rect.push_attribute(("y", "0"));
    rect.push_attribute(("width", width.as_str()));
    rect.push_attribute(("height", height.as_str()));
    rect.push_attribute(("fill", fill.as_str()));
    write_empty(&mut xml, &rect)?;

    let k = layout.kanji;
    let kanji_style = format!(
        "font-family: {};font-size: {}px;writing-mode: tb",
        KANJI_FONT, k.size
    );
    write_label(&mut xml, k.x, k.y, &kanji_style, &color.kanji)?;

    let r = layout.romanji;
    let romanji_style = format!(
        "font-family: {};font-size: {}px;text-anchor: middle;dominant-baseline: top",
        ROMANJI_FONT, r.size
    );
    write_label(&mut xml, r.x, r.y, &romanji_style, &color.romanji)?;

    xml.write_event(Event::End(BytesEnd::new("svg"))).map_err(xml_err)?;
    Ok(())
}

/// Renders the card for `color` to a string.
///
/// ```rust
/// use iro_core::EnrichedColor;
///
/// let color = EnrichedColor {
///     romanji: "sumi".into(),
///     kanji: "墨".into(),
///     hex: "#1C1C1C".into(),
///     rgb: [28, 28, 28],
///     hls: [0.0, 0.10980392156862745, 0.0],
/// };
/// let svg = iro_render::render_card(&color).unwrap();
/// assert!(svg.starts_with("<?xml version=\"1.0\" standalone=\"no\"?>\n<!DOCTYPE svg PUBLIC"));
/// assert!(svg.contains("fill=\"rgb(28,28,28)\""));
/// ```
pub fn render_card(color: &EnrichedColor) -> RenderResult<String> {
    let mut buf = Vec::new();
    write_card_to(&mut buf, color)?;
    String::from_utf8(buf).map_err(|e| RenderError::Xml(e.to_string()))
}

fn write_label<W: Write>(xml: &mut Writer<W>, x: u32, y: u32, style: &str, text: &str) -> RenderResult<()> {
    let x = x.to_string();
    let y = y.to_string();
    let mut start = BytesStart::new("text");
    start.push_attribute(("x", x.as_str()));
    start.push_attribute(("y", y.as_str()));
    start.push_attribute(("fill", LABEL_FILL));
    start.push_attribute(("style", style));
    xml.write_event(Event::Start(start)).map_err(xml_err)?;
    // text nodes only escape `<`, `>` and `&`; quotes stay literal
    xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
        .map_err(xml_err)?;
    xml.write_event(Event::End(BytesEnd::new("text"))).map_err(xml_err)?;
    Ok(())
}

/// Writes `<name attrs />`, with a space before the slash.
fn write_empty<W: Write>(xml: &mut Writer<W>, elem: &BytesStart<'_>) -> RenderResult<()> {
    let out = xml.get_mut();
    out.write_all(b"<").map_err(xml_err)?;
    out.write_all(elem).map_err(xml_err)?;
    out.write_all(b" />").map_err(xml_err)
}

fn newline<W: Write>(xml: &mut Writer<W>) -> RenderResult<()> {
    xml.write_event(Event::Text(BytesText::from_escaped("\n")))
        .map_err(xml_err)
}

fn xml_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Xml(format!("write error: {}", e))
}

/// Writes cards into a fixed directory, one `<romanji>.svg` per color.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    dir: PathBuf,
}

impl ImageGenerator {
    /// Creates a generator writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the card for `color` is written to. The file stem is the romanji verbatim.
    pub fn path_for(&self, color: &EnrichedColor) -> PathBuf {
        self.dir.join(format!("{}.{}", color.romanji, EXTENSION))
    }

    /// Creates the output directory if it does not exist.
    pub fn ensure_dir(&self) -> RenderResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| RenderError::write(&self.dir, e))
    }

    /// Writes the card for `color`, overwriting any existing file.
    pub fn generate(&self, color: &EnrichedColor) -> RenderResult<PathBuf> {
        let path = self.path_for(color);
        trace!(romanji = %color.romanji, path = %path.display(), "ImageGenerator::generate");

        let file = File::create(&path).map_err(|e| RenderError::write(&path, e))?;
        let mut writer = BufWriter::new(file);
        write_card_to(&mut writer, color)?;
        writer.flush().map_err(|e| RenderError::write(&path, e))?;

        debug!(path = %path.display(), "Wrote card");
        Ok(path)
    }

    /// Writes cards for every color, in order. Stops at the first failure.
    pub fn generate_all<'a, I>(&self, colors: I) -> RenderResult<usize>
    where
        I: IntoIterator<Item = &'a EnrichedColor>,
    {
        self.ensure_dir()?;
        let mut count = 0;
        for color in colors {
            self.generate(color)?;
            count += 1;
        }
        Ok(count)
    }
}
