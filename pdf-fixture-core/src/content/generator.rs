use super::layout::{Layout, INCH};
use super::{Circle, PageContent, Rectangle, Shape, TextRun};
use crate::graphics::Color;

const PARAGRAPH: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt.";

/// Builds the content of each fixture page. Output depends only on the
/// arguments and the layout; there is no randomness and no state carried
/// between pages.
#[derive(Debug, Clone, Default)]
pub struct PageContentGenerator {
    layout: Layout,
}

impl PageContentGenerator {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Content for page `page_index` of `total_pages`.
    ///
    /// `page_index` must be in `1..=total_pages`; other values are not
    /// rejected in release builds and simply produce the matching labels.
    pub fn generate(&self, page_index: u32, total_pages: u32, include_shapes: bool) -> PageContent {
        debug_assert!(
            (1..=total_pages).contains(&page_index),
            "page {page_index} out of range 1..={total_pages}"
        );
        let layout = &self.layout;

        let header = TextRun {
            x: layout.margin_left,
            y: layout.header_y(),
            font: layout.header_font,
            size: layout.header_size,
            text: format!("Test Page {page_index}"),
        };

        let mut body = Vec::with_capacity(layout.paragraph_slots);
        let mut cursor = layout.body_start_y();
        for para in 1..=layout.paragraph_slots {
            body.push(TextRun {
                x: layout.margin_left,
                y: cursor,
                font: layout.body_font,
                size: layout.body_size,
                text: paragraph_text(page_index, para, layout.max_line_chars),
            });
            cursor -= layout.line_height;

            if cursor < layout.body_bottom {
                break;
            }
        }

        let shapes = if include_shapes {
            decorations(layout.shape_pairs)
        } else {
            Vec::new()
        };

        let footer = TextRun {
            x: layout.margin_left,
            y: layout.footer_y,
            font: layout.footer_font,
            size: layout.footer_size,
            text: format!("Generated test PDF - Page {page_index} of {total_pages}"),
        };

        PageContent {
            index: page_index,
            header,
            body,
            shapes,
            footer,
        }
    }

    /// Content for every page of a `total_pages` document, in order.
    pub fn pages(
        &self,
        total_pages: u32,
        include_shapes: bool,
    ) -> impl Iterator<Item = PageContent> + '_ {
        (1..=total_pages).map(move |index| self.generate(index, total_pages, include_shapes))
    }
}

/// Paragraph line `para` of page `page`: the paragraph sentence with its
/// page/paragraph tag, doubled, then cut to `max_chars` characters.
pub fn paragraph_text(page: u32, para: usize, max_chars: usize) -> String {
    format!("{PARAGRAPH} Page {page}, Para {para}. ")
        .repeat(2)
        .chars()
        .take(max_chars)
        .collect()
}

/// Rectangle/circle pairs, each a linear function of its index.
fn decorations(pairs: usize) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(pairs * 2);
    for i in 0..pairs {
        let step = i as f64;
        shapes.push(Shape::Rectangle(Rectangle {
            x: INCH + step * 0.3 * INCH,
            y: 1.5 * INCH - step * 0.1 * INCH,
            width: 1.5 * INCH,
            height: 0.8 * INCH,
            fill: Color::rgb(0.7 + step * 0.03, 0.7 + step * 0.02, 0.9),
        }));
        shapes.push(Shape::Circle(Circle {
            cx: 2.0 * INCH + step * 0.2 * INCH,
            cy: INCH,
            radius: 0.3 * INCH,
            stroke: Color::rgb(0.2, 0.2, 0.4),
            stroke_width: 2.0,
        }));
    }
    shapes
}
