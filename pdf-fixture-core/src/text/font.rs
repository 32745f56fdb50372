/// Standard Type 1 fonts the writer registers on every page.
///
/// Standard fonts are guaranteed to be available in all PDF readers
/// and don't need to be embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica (sans-serif)
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Times Roman (serif)
    TimesRoman,
    /// Courier (monospace)
    Courier,
}

impl Font {
    /// Every font the writer declares, in object-number order.
    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::TimesRoman,
        Font::Courier,
    ];

    /// Get the PDF name for this font
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::TimesRoman => "Times-Roman",
            Font::Courier => "Courier",
        }
    }
}
