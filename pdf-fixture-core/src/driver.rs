//! Generation loop: drives a [`PageContentGenerator`] into a [`DocumentSink`]
//! and reports on the file it produced.

use crate::content::{Layout, PageContentGenerator};
use crate::document::DocumentMetadata;
use crate::error::Result;
use crate::page::PageSize;
use crate::sink::DocumentSink;
use crate::writer::{PdfWriter, WriterOptions};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_OUTPUT: &str = "test-large.pdf";
pub const DEFAULT_PAGES: u32 = 100;
/// Pages between progress notifications.
pub const PROGRESS_INTERVAL: u32 = 10;

/// What to generate and where to put it.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub total_pages: u32,
    pub include_shapes: bool,
    pub page_size: PageSize,
    pub compress: bool,
    pub metadata: DocumentMetadata,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            total_pages: DEFAULT_PAGES,
            include_shapes: true,
            page_size: PageSize::default(),
            compress: false,
            metadata: DocumentMetadata::default(),
        }
    }
}

impl GenerateOptions {
    pub fn new(output: impl Into<PathBuf>, total_pages: u32) -> Self {
        Self {
            output: output.into(),
            total_pages,
            ..Default::default()
        }
    }

    pub fn with_shapes(mut self, include_shapes: bool) -> Self {
        self.include_shapes = include_shapes;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub pages: u32,
    pub output: PathBuf,
    pub bytes: u64,
    pub page_size: PageSize,
    pub include_shapes: bool,
    pub compressed: bool,
}

impl GenerationReport {
    /// File size in mebibytes.
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Stream pages `1..=total_pages` into `sink`, committing after each page.
///
/// `on_progress` is called with the number of pages written every
/// [`PROGRESS_INTERVAL`] pages. The sink is not finalized.
pub fn write_pages<S, F>(
    sink: &mut S,
    generator: &PageContentGenerator,
    total_pages: u32,
    include_shapes: bool,
    mut on_progress: F,
) -> Result<u32>
where
    S: DocumentSink + ?Sized,
    F: FnMut(u32),
{
    let mut written = 0;
    for content in generator.pages(total_pages, include_shapes) {
        for primitive in content.into_primitives() {
            sink.emit(&primitive)?;
        }
        sink.commit_page()?;
        written += 1;

        if written % PROGRESS_INTERVAL == 0 {
            info!(pages = written, total = total_pages, "generation progress");
            on_progress(written);
        }
    }
    Ok(written)
}

/// Generate the document described by `options` and write it to disk.
pub fn run(options: &GenerateOptions) -> Result<GenerationReport> {
    run_with_progress(options, |_| {})
}

/// Like [`run`], calling `on_progress` every [`PROGRESS_INTERVAL`] pages.
pub fn run_with_progress<F>(options: &GenerateOptions, on_progress: F) -> Result<GenerationReport>
where
    F: FnMut(u32),
{
    debug!(
        output = %options.output.display(),
        pages = options.total_pages,
        include_shapes = options.include_shapes,
        page_size = ?options.page_size,
        compress = options.compress,
        "starting generation"
    );

    let generator = PageContentGenerator::new(Layout::for_page_size(options.page_size));
    let writer_options = WriterOptions {
        compress: options.compress,
        metadata: options.metadata.clone(),
    };

    let pages = {
        let mut writer = PdfWriter::create(&options.output, options.page_size, writer_options)?;
        let pages = write_pages(
            &mut writer,
            &generator,
            options.total_pages,
            options.include_shapes,
            on_progress,
        )?;
        writer.finalize()?;
        pages
    };

    let bytes = file_size(&options.output)?;
    info!(
        output = %options.output.display(),
        pages,
        bytes,
        "generated document"
    );

    Ok(GenerationReport {
        pages,
        output: options.output.clone(),
        bytes,
        page_size: options.page_size,
        include_shapes: options.include_shapes,
        compressed: options.compress,
    })
}

fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}
