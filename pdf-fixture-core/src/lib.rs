//! # pdf-fixture
//!
//! Deterministic multi-page PDF generation for exercising PDF renderers and
//! readers with large documents.
//!
//! ## Features
//!
//! - **Deterministic content**: page content is a pure function of the page
//!   number, the page count and the page size
//! - **Streaming output**: pages are written as they are produced, so memory
//!   stays flat regardless of page count
//! - **Standard fonts only**: Helvetica, Helvetica-Bold, Times-Roman and
//!   Courier, WinAnsi encoded
//! - **Optional compression**: FlateDecode content streams behind the
//!   `compression` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_fixture::{run, GenerateOptions, PageSize, Result};
//!
//! # fn main() -> Result<()> {
//! let options = GenerateOptions::new("test-large.pdf", 100)
//!     .with_page_size(PageSize::A4)
//!     .with_shapes(true);
//!
//! let report = run(&options)?;
//! println!("{} pages, {:.2} MB", report.pages, report.size_mb());
//! # Ok(())
//! # }
//! ```
//!
//! ### Driving a sink directly
//!
//! ```rust
//! use pdf_fixture::driver::write_pages;
//! use pdf_fixture::{DocumentSink, PageContentGenerator, RecordingSink, Result};
//!
//! # fn main() -> Result<()> {
//! let generator = PageContentGenerator::default();
//! let mut sink = RecordingSink::new();
//!
//! write_pages(&mut sink, &generator, 3, false, |_| {})?;
//! sink.finalize()?;
//!
//! assert_eq!(sink.pages_committed(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`content`] - Page content generation and layout
//! - [`sink`] - The [`DocumentSink`] capability set and an in-memory sink
//! - [`writer`] - Streaming PDF writer
//! - [`driver`] - Generation loop and report
//! - [`page`], [`graphics`], [`text`] - Content stream assembly
//! - [`objects`] - Low-level PDF objects

#[cfg(feature = "compression")]
pub mod compression;
pub mod content;
pub mod document;
pub mod driver;
pub mod error;
pub mod graphics;
pub mod objects;
pub mod page;
pub mod sink;
pub mod text;
pub mod writer;

// Re-export generation types
pub use content::{
    Circle, Layout, PageContent, PageContentGenerator, Primitive, Rectangle, Shape, TextRun,
};
pub use document::DocumentMetadata;
pub use driver::{run, GenerateOptions, GenerationReport};
pub use error::{PdfError, Result};
pub use graphics::Color;
pub use page::{Page, PageSize};
pub use sink::{DocumentSink, RecordingSink};
pub use text::Font;
pub use writer::{PdfWriter, WriterOptions};

/// Current version of pdf-fixture
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
