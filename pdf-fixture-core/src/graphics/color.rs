/// Represents a color in PDF documents.
///
/// Supports RGB, Grayscale, and CMYK color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Creates a CMYK color with values clamped to 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(
            c.clamp(0.0, 1.0),
            m.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            k.clamp(0.0, 1.0),
        )
    }

    /// Content-stream operator that selects this color, e.g. `0.2 0.2 0.4 RG`.
    pub(crate) fn operator(&self, stroke: bool) -> String {
        match *self {
            Color::Rgb(r, g, b) => {
                format!("{r:.3} {g:.3} {b:.3} {}", if stroke { "RG" } else { "rg" })
            }
            Color::Gray(g) => format!("{g:.3} {}", if stroke { "G" } else { "g" }),
            Color::Cmyk(c, m, y, k) => {
                format!(
                    "{c:.3} {m:.3} {y:.3} {k:.3} {}",
                    if stroke { "K" } else { "k" }
                )
            }
        }
    }
}
