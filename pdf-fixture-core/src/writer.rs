use crate::content::{Circle, Rectangle, TextRun};
use crate::document::DocumentMetadata;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::{Page, PageSize};
use crate::sink::{finalized_error, DocumentSink};
use crate::text::{encode_win_ansi, escape_literal, Font};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

const CATALOG_ID: ObjectId = ObjectId::new(1, 0);
const PAGES_ID: ObjectId = ObjectId::new(2, 0);
const FIRST_FONT_NUMBER: u32 = 3;

/// Settings for a [`PdfWriter`].
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    /// FlateDecode page content streams. Ignored without the `compression`
    /// feature.
    pub compress: bool,
    pub metadata: DocumentMetadata,
}

/// Streaming PDF writer.
///
/// The header and the shared font dictionaries are written on construction.
/// Each committed page is written out immediately, so only the page being
/// drawn is held in memory. The page tree, catalog, info dictionary, xref
/// table and trailer are written by [`DocumentSink::finalize`].
///
/// Object numbers: 1 is the catalog, 2 the page tree, 3.. the fonts, then a
/// content stream and a page dictionary per page, and the info dictionary
/// last.
pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: HashMap<ObjectId, u64>,
    current_position: u64,
    page_size: PageSize,
    options: WriterOptions,
    fonts: Vec<(Font, ObjectId)>,
    page_ids: Vec<ObjectId>,
    next_object_number: u32,
    current_page: Option<Page>,
    finalized: bool,
}

impl PdfWriter<BufWriter<File>> {
    /// Create the file at `path` and start a document in it.
    pub fn create(
        path: impl AsRef<Path>,
        page_size: PageSize,
        options: WriterOptions,
    ) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), page_size, options)
    }
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, page_size: PageSize, options: WriterOptions) -> Result<Self> {
        let mut pdf = Self {
            writer,
            xref_positions: HashMap::new(),
            current_position: 0,
            page_size,
            options,
            fonts: Vec::with_capacity(Font::ALL.len()),
            page_ids: Vec::new(),
            next_object_number: FIRST_FONT_NUMBER,
            current_page: None,
            finalized: false,
        };
        pdf.write_header()?;
        pdf.write_fonts()?;
        Ok(pdf)
    }

    /// Bytes written to the underlying writer so far.
    pub fn bytes_written(&self) -> u64 {
        self.current_position
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Return the underlying writer. Call after finalizing to get a complete
    /// document.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.7\n")?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_fonts(&mut self) -> Result<()> {
        for font in Font::ALL {
            let id = self.allocate_id();
            let mut font_dict = Dictionary::new();
            font_dict.set("Type", Object::name("Font"));
            font_dict.set("Subtype", Object::name("Type1"));
            font_dict.set("BaseFont", Object::name(font.pdf_name()));
            font_dict.set("Encoding", Object::name("WinAnsiEncoding"));
            self.write_object(id, Object::Dictionary(font_dict))?;
            self.fonts.push((font, id));
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_number, 0);
        self.next_object_number += 1;
        id
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.finalized {
            return Err(finalized_error(operation));
        }
        Ok(())
    }

    /// The page being drawn, opened on first use.
    fn page_mut(&mut self, operation: &str) -> Result<&mut Page> {
        self.ensure_open(operation)?;
        let size = self.page_size;
        Ok(self
            .current_page
            .get_or_insert_with(|| Page::with_size(size)))
    }

    fn write_page(&mut self, page: Page) -> Result<()> {
        let content_id = self.allocate_id();
        let page_id = self.allocate_id();
        let (width, height) = (page.width(), page.height());
        let content = page.into_content();
        let content_len = content.len();

        self.write_page_content(content_id, content)?;

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", Object::Reference(PAGES_ID));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", self.resources());
        self.write_object(page_id, Object::Dictionary(page_dict))?;

        self.page_ids.push(page_id);
        debug!(
            page = self.page_ids.len(),
            object = page_id.number(),
            content_bytes = content_len,
            "committed page"
        );
        Ok(())
    }

    fn resources(&self) -> Dictionary {
        let mut font_dict = Dictionary::with_capacity(self.fonts.len());
        for (font, id) in &self.fonts {
            font_dict.set(font.pdf_name(), Object::Reference(*id));
        }
        let mut resources = Dictionary::new();
        resources.set("Font", font_dict);
        resources
    }

    fn write_page_content(&mut self, content_id: ObjectId, content: Vec<u8>) -> Result<()> {
        #[cfg_attr(not(feature = "compression"), allow(unused_mut))]
        let mut stream = Stream::new(content);

        #[cfg(feature = "compression")]
        if self.options.compress {
            stream.compress_flate()?;
        }

        self.write_object(content_id, stream.into_object())
    }

    fn write_pages_tree(&mut self) -> Result<()> {
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set(
            "Kids",
            Object::Array(self.page_ids.iter().copied().map(Object::Reference).collect()),
        );
        pages_dict.set("Count", Object::Integer(self.page_ids.len() as i64));
        self.write_object(PAGES_ID, Object::Dictionary(pages_dict))
    }

    fn write_catalog(&mut self) -> Result<()> {
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", Object::Reference(PAGES_ID));
        self.write_object(CATALOG_ID, Object::Dictionary(catalog))
    }

    fn write_info(&mut self) -> Result<ObjectId> {
        let info_id = self.allocate_id();
        let info = self.options.metadata.to_info_dictionary();
        self.write_object(info_id, Object::Dictionary(info))?;
        Ok(info_id)
    }

    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => {
                let escaped = escape_literal(&encode_win_ansi(s));
                self.write_bytes(b"(")?;
                self.write_bytes(escaped.as_bytes())?;
                self.write_bytes(b")")?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => self.write_bytes(id.to_string().as_bytes())?,
        }
        Ok(())
    }

    fn max_object_number(&self) -> u32 {
        self.xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0)
    }

    fn write_xref(&mut self) -> Result<()> {
        self.write_bytes(b"xref\n")?;

        let max_obj_num = self.max_object_number();
        let offsets: HashMap<u32, u64> = self
            .xref_positions
            .iter()
            .map(|(id, pos)| (id.number(), *pos))
            .collect();

        self.write_bytes(format!("0 {}\n", max_obj_num + 1).as_bytes())?;

        // Each entry is exactly 20 bytes, including the two-byte line end.
        self.write_bytes(b"0000000000 65535 f \n")?;
        for obj_num in 1..=max_obj_num {
            match offsets.get(&obj_num) {
                Some(position) => {
                    let entry = format!("{:010} {:05} n \n", position, 0);
                    self.write_bytes(entry.as_bytes())?;
                }
                None => self.write_bytes(b"0000000000 00000 f \n")?,
            }
        }

        Ok(())
    }

    fn write_trailer(&mut self, info_id: ObjectId, xref_position: u64) -> Result<()> {
        let mut trailer = Dictionary::new();
        trailer.set("Size", Object::Integer(self.max_object_number() as i64 + 1));
        trailer.set("Root", Object::Reference(CATALOG_ID));
        trailer.set("Info", Object::Reference(info_id));

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

impl<W: Write> DocumentSink for PdfWriter<W> {
    fn emit_text(&mut self, run: &TextRun) -> Result<()> {
        let page = self.page_mut("emit_text")?;
        page.text()
            .set_font(run.font, run.size)
            .at(run.x, run.y)
            .write(&run.text);
        page.flush();
        Ok(())
    }

    fn emit_rectangle(&mut self, rect: &Rectangle) -> Result<()> {
        let page = self.page_mut("emit_rectangle")?;
        page.graphics()
            .save_state()
            .set_fill_color(rect.fill)
            .rect(rect.x, rect.y, rect.width, rect.height)
            .fill()
            .restore_state();
        page.flush();
        Ok(())
    }

    fn emit_circle(&mut self, circle: &Circle) -> Result<()> {
        let page = self.page_mut("emit_circle")?;
        page.graphics()
            .save_state()
            .set_stroke_color(circle.stroke)
            .set_line_width(circle.stroke_width)
            .circle(circle.cx, circle.cy, circle.radius)
            .stroke()
            .restore_state();
        page.flush();
        Ok(())
    }

    fn commit_page(&mut self) -> Result<()> {
        self.ensure_open("commit_page")?;
        let page = self
            .current_page
            .take()
            .unwrap_or_else(|| Page::with_size(self.page_size));
        self.write_page(page)
    }

    fn finalize(&mut self) -> Result<()> {
        self.ensure_open("finalize")?;
        // Set up front: a failed finalize leaves a partial tail that must not
        // be written again.
        self.finalized = true;

        if let Some(page) = self.current_page.take() {
            self.write_page(page)?;
        }

        let info_id = self.write_info()?;
        self.write_pages_tree()?;
        self.write_catalog()?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(info_id, xref_position)?;
        self.writer.flush()?;

        debug!(
            pages = self.page_ids.len(),
            bytes = self.current_position,
            "finalized document"
        );
        Ok(())
    }

    fn pages_committed(&self) -> usize {
        self.page_ids.len()
    }
}

/// Format a real number without trailing zeros or exponent.
fn format_real(f: f64) -> String {
    format!("{f:.6}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
