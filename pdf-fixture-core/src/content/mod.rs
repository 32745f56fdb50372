//! Page content as plain data: the drawing primitives one page is made of.
//!
//! [`PageContentGenerator`] builds a [`PageContent`] for each page; a
//! [`DocumentSink`](crate::sink::DocumentSink) turns the primitives into
//! whatever the backend needs.

mod generator;
mod layout;

pub use generator::{paragraph_text, PageContentGenerator};
pub use layout::{Layout, INCH};

use crate::graphics::Color;
use crate::text::Font;

/// A single line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Baseline start, in points from the left page edge.
    pub x: f64,
    /// Baseline, in points from the bottom page edge.
    pub y: f64,
    pub font: Font,
    pub size: f64,
    pub text: String,
}

/// Filled, unstroked rectangle with its lower-left corner at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

/// Stroked, unfilled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// Decoration drawn between the body text and the footer.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

/// One atomic drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(TextRun),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl From<Shape> for Primitive {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Rectangle(rect) => Primitive::Rectangle(rect),
            Shape::Circle(circle) => Primitive::Circle(circle),
        }
    }
}

impl Primitive {
    pub fn is_shape(&self) -> bool {
        !matches!(self, Primitive::Text(_))
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        match self {
            Primitive::Text(run) => Some(run),
            _ => None,
        }
    }
}

/// Everything drawn on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// 1-based page number.
    pub index: u32,
    pub header: TextRun,
    pub body: Vec<TextRun>,
    pub shapes: Vec<Shape>,
    pub footer: TextRun,
}

impl PageContent {
    /// Primitives in drawing order: header, body lines, shapes, footer.
    pub fn into_primitives(self) -> Vec<Primitive> {
        let mut primitives = Vec::with_capacity(self.primitive_count());
        primitives.push(Primitive::Text(self.header));
        primitives.extend(self.body.into_iter().map(Primitive::Text));
        primitives.extend(self.shapes.into_iter().map(Primitive::from));
        primitives.push(Primitive::Text(self.footer));
        primitives
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        self.clone().into_primitives()
    }

    pub fn primitive_count(&self) -> usize {
        self.body.len() + self.shapes.len() + 2
    }
}
