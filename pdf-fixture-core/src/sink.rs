//! Document sinks: the targets page primitives are streamed into.

use crate::content::{Circle, Primitive, Rectangle, TextRun};
use crate::error::{PdfError, Result};

/// A document-writing target that accepts drawing primitives page by page.
///
/// Primitives go to the current page until [`commit_page`](Self::commit_page).
/// [`finalize`](Self::finalize) is accepted exactly once; any call after it
/// fails with [`PdfError::InvalidStructure`].
pub trait DocumentSink {
    fn emit_text(&mut self, run: &TextRun) -> Result<()>;

    fn emit_rectangle(&mut self, rect: &Rectangle) -> Result<()>;

    fn emit_circle(&mut self, circle: &Circle) -> Result<()>;

    /// Close the current page and start a new one.
    fn commit_page(&mut self) -> Result<()>;

    /// Finish the document. Primitives emitted since the last commit are
    /// committed as a final page first.
    fn finalize(&mut self) -> Result<()>;

    /// Number of pages committed so far.
    fn pages_committed(&self) -> usize;

    fn emit(&mut self, primitive: &Primitive) -> Result<()> {
        match primitive {
            Primitive::Text(run) => self.emit_text(run),
            Primitive::Rectangle(rect) => self.emit_rectangle(rect),
            Primitive::Circle(circle) => self.emit_circle(circle),
        }
    }
}

pub(crate) fn finalized_error(operation: &str) -> PdfError {
    PdfError::InvalidStructure(format!("{operation} after document was finalized"))
}

/// Sink that keeps every primitive in memory, grouped by page.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pages: Vec<Vec<Primitive>>,
    current: Vec<Primitive>,
    finalized: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed pages, in commit order.
    pub fn pages(&self) -> &[Vec<Primitive>] {
        &self.pages
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn primitive_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    fn record(&mut self, primitive: Primitive) -> Result<()> {
        if self.finalized {
            return Err(finalized_error("emit"));
        }
        self.current.push(primitive);
        Ok(())
    }
}

impl DocumentSink for RecordingSink {
    fn emit_text(&mut self, run: &TextRun) -> Result<()> {
        self.record(Primitive::Text(run.clone()))
    }

    fn emit_rectangle(&mut self, rect: &Rectangle) -> Result<()> {
        self.record(Primitive::Rectangle(rect.clone()))
    }

    fn emit_circle(&mut self, circle: &Circle) -> Result<()> {
        self.record(Primitive::Circle(circle.clone()))
    }

    fn commit_page(&mut self) -> Result<()> {
        if self.finalized {
            return Err(finalized_error("commit_page"));
        }
        self.pages.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(finalized_error("finalize"));
        }
        if !self.current.is_empty() {
            self.commit_page()?;
        }
        self.finalized = true;
        Ok(())
    }

    fn pages_committed(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Color;
    use crate::text::Font;

    fn text(s: &str) -> TextRun {
        TextRun {
            x: 72.0,
            y: 700.0,
            font: Font::Helvetica,
            size: 12.0,
            text: s.to_string(),
        }
    }

    #[test]
    fn test_records_pages_in_order() {
        let mut sink = RecordingSink::new();
        sink.emit_text(&text("one")).unwrap();
        sink.commit_page().unwrap();
        sink.emit(&Primitive::Rectangle(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            fill: Color::gray(0.5),
        }))
        .unwrap();
        sink.emit_text(&text("two")).unwrap();
        sink.commit_page().unwrap();
        sink.finalize().unwrap();

        assert_eq!(sink.pages_committed(), 2);
        assert_eq!(sink.pages()[0].len(), 1);
        assert_eq!(sink.pages()[1].len(), 2);
        assert!(sink.pages()[1][0].is_shape());
        assert_eq!(sink.primitive_count(), 3);
        assert!(sink.is_finalized());
    }

    #[test]
    fn test_empty_commit_is_blank_page() {
        let mut sink = RecordingSink::new();
        sink.commit_page().unwrap();
        assert_eq!(sink.pages_committed(), 1);
        assert!(sink.pages()[0].is_empty());
    }

    #[test]
    fn test_finalize_commits_pending_primitives() {
        let mut sink = RecordingSink::new();
        sink.emit_text(&text("tail")).unwrap();
        sink.finalize().unwrap();
        assert_eq!(sink.pages_committed(), 1);
    }

    #[test]
    fn test_finalize_with_no_pages() {
        let mut sink = RecordingSink::new();
        sink.finalize().unwrap();
        assert_eq!(sink.pages_committed(), 0);
    }

    #[test]
    fn test_finalize_twice_fails() {
        let mut sink = RecordingSink::new();
        sink.finalize().unwrap();
        assert!(matches!(sink.finalize(), Err(PdfError::InvalidStructure(_))));
    }

    #[test]
    fn test_use_after_finalize_fails() {
        let mut sink = RecordingSink::new();
        sink.finalize().unwrap();
        assert!(matches!(
            sink.emit_circle(&Circle {
                cx: 0.0,
                cy: 0.0,
                radius: 1.0,
                stroke: Color::gray(0.0),
                stroke_width: 1.0,
            }),
            Err(PdfError::InvalidStructure(_))
        ));
        assert!(matches!(sink.commit_page(), Err(PdfError::InvalidStructure(_))));
    }
}
