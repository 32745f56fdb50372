use crate::page::PageSize;
use crate::text::Font;

/// Points per inch.
pub const INCH: f64 = 72.0;

/// Fixed geometry of a fixture page. Vertical positions near the top are
/// measured down from the page height; everything else is absolute.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub page_size: PageSize,
    /// X of every text run.
    pub margin_left: f64,
    /// Header baseline, measured down from the top edge.
    pub header_offset: f64,
    pub header_font: Font,
    pub header_size: f64,
    /// First body baseline, measured down from the top edge.
    pub body_offset: f64,
    pub body_font: Font,
    pub body_size: f64,
    pub line_height: f64,
    /// Body emission stops once the cursor drops below this.
    pub body_bottom: f64,
    pub paragraph_slots: usize,
    /// Paragraph text is cut to this many characters.
    pub max_line_chars: usize,
    /// Number of rectangle/circle pairs per page.
    pub shape_pairs: usize,
    pub footer_y: f64,
    pub footer_font: Font,
    pub footer_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin_left: INCH,
            header_offset: INCH,
            header_font: Font::HelveticaBold,
            header_size: 24.0,
            body_offset: 2.0 * INCH,
            body_font: Font::Helvetica,
            body_size: 12.0,
            line_height: 0.25 * INCH,
            body_bottom: 2.0 * INCH,
            paragraph_slots: 35,
            max_line_chars: 90,
            shape_pairs: 8,
            footer_y: 0.5 * INCH,
            footer_font: Font::Helvetica,
            footer_size: 10.0,
        }
    }
}

impl Layout {
    pub fn for_page_size(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn header_y(&self) -> f64 {
        self.page_size.height() - self.header_offset
    }

    pub fn body_start_y(&self) -> f64 {
        self.page_size.height() - self.body_offset
    }

    /// Body lines that fit before the early-exit threshold, capped by the
    /// paragraph slot count.
    pub fn max_body_lines(&self) -> usize {
        let mut cursor = self.body_start_y();
        let mut lines = 0;
        while lines < self.paragraph_slots {
            lines += 1;
            cursor -= self.line_height;
            if cursor < self.body_bottom {
                break;
            }
        }
        lines
    }
}
