mod encoding;
mod font;

pub use encoding::{encode_win_ansi, escape_literal};
pub use font::Font;

use std::fmt::Write;

/// Accumulates text objects for one page's content stream.
#[derive(Clone, Debug)]
pub struct TextContext {
    operations: String,
    current_font: Font,
    font_size: f64,
    position: (f64, f64),
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            current_font: Font::Helvetica,
            font_size: 12.0,
            position: (0.0, 0.0),
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.current_font = font;
        self.font_size = size;
        self
    }

    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.position = (x, y);
        self
    }

    /// Show `text` as one self-contained `BT ... ET` object at the current
    /// position.
    pub fn write(&mut self, text: &str) -> &mut Self {
        let (x, y) = self.position;
        let encoded = encode_win_ansi(text);

        self.operations.push_str("BT\n");
        writeln!(
            &mut self.operations,
            "/{} {} Tf",
            self.current_font.pdf_name(),
            self.font_size
        )
        .unwrap();
        writeln!(&mut self.operations, "{x:.2} {y:.2} Td").unwrap();
        writeln!(&mut self.operations, "({}) Tj", escape_literal(&encoded)).unwrap();
        self.operations.push_str("ET\n");

        self
    }

    pub(crate) fn take_operations(&mut self) -> String {
        std::mem::take(&mut self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_object() {
        let mut text = TextContext::new();
        text.set_font(Font::HelveticaBold, 24.0)
            .at(72.0, 720.0)
            .write("Test Page 1");

        assert_eq!(
            text.take_operations(),
            "BT\n/Helvetica-Bold 24 Tf\n72.00 720.00 Td\n(Test Page 1) Tj\nET\n"
        );
    }

    #[test]
    fn test_write_escapes_parentheses() {
        let mut text = TextContext::new();
        text.at(10.0, 10.0).write("f(x)");
        assert!(text.take_operations().contains("(f\\(x\\)) Tj"));
    }

    #[test]
    fn test_fractional_font_size() {
        let mut text = TextContext::new();
        text.set_font(Font::Courier, 10.5).write("x");
        assert!(text.take_operations().contains("/Courier 10.5 Tf"));
    }

    #[test]
    fn test_take_operations_clears_buffer() {
        let mut text = TextContext::new();
        text.write("a");
        assert!(!text.take_operations().is_empty());
        assert!(text.take_operations().is_empty());
    }
}
