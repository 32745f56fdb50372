use crate::graphics::GraphicsContext;
use crate::text::TextContext;
use serde::Serialize;

/// Page dimensions in points (1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter (612 x 792 points).
    #[default]
    Letter,
    /// ISO A4 (595 x 842 points).
    A4,
}

impl PageSize {
    pub fn width(&self) -> f64 {
        match self {
            PageSize::Letter => 612.0,
            PageSize::A4 => 595.0,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            PageSize::Letter => 792.0,
            PageSize::A4 => 842.0,
        }
    }
}

/// A page being assembled by the writer.
///
/// Graphics and text operators are drawn through their contexts and moved
/// into the page content with [`Page::flush`], so the content stream keeps the
/// order in which primitives were drawn.
#[derive(Clone, Debug)]
pub struct Page {
    width: f64,
    height: f64,
    content: Vec<u8>,
    graphics_context: GraphicsContext,
    text_context: TextContext,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: Vec::new(),
            graphics_context: GraphicsContext::new(),
            text_context: TextContext::new(),
        }
    }

    pub fn with_size(size: PageSize) -> Self {
        Self::new(size.width(), size.height())
    }

    /// Returns a mutable reference to the graphics context for drawing shapes.
    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    /// Returns a mutable reference to the text context for adding text.
    pub fn text(&mut self) -> &mut TextContext {
        &mut self.text_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Move pending graphics operators, then pending text operators, into the
    /// page content.
    pub fn flush(&mut self) {
        let graphics = self.graphics_context.take_operations();
        self.content.extend_from_slice(graphics.as_bytes());
        let text = self.text_context.take_operations();
        self.content.extend_from_slice(text.as_bytes());
    }

    pub(crate) fn into_content(mut self) -> Vec<u8> {
        self.flush();
        self.content
    }
}
