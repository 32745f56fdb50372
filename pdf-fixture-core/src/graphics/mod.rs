mod color;

pub use color::Color;

use std::fmt::Write;

/// Bézier control-point distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552284749831;

/// Accumulates path and paint operators for one page's content stream.
#[derive(Clone, Debug, Default)]
pub struct GraphicsContext {
    operations: String,
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        writeln!(&mut self.operations, "{x:.2} {y:.2} m").unwrap();
        self
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x1:.2} {y1:.2} {x2:.2} {y2:.2} {x3:.2} {y3:.2} c"
        )
        .unwrap();
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x:.2} {y:.2} {width:.2} {height:.2} re"
        )
        .unwrap();
        self
    }

    /// Circle approximated by four cubic Bézier arcs, starting at 3 o'clock.
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64) -> &mut Self {
        let k = KAPPA;
        let r = radius;

        self.move_to(cx + r, cy);
        self.curve_to(cx + r, cy + k * r, cx + k * r, cy + r, cx, cy + r);
        self.curve_to(cx - k * r, cy + r, cx - r, cy + k * r, cx - r, cy);
        self.curve_to(cx - r, cy - k * r, cx - k * r, cy - r, cx, cy - r);
        self.curve_to(cx + k * r, cy - r, cx + r, cy - k * r, cx + r, cy);
        self.close_path()
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.operations.push_str("h\n");
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.operations.push_str("S\n");
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.operations.push_str("f\n");
        self
    }

    /// Color operators are emitted immediately; they are not allowed inside a
    /// path object, so set colors before starting the path.
    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        writeln!(&mut self.operations, "{}", color.operator(true)).unwrap();
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        writeln!(&mut self.operations, "{}", color.operator(false)).unwrap();
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        writeln!(&mut self.operations, "{width:.2} w").unwrap();
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.operations.push_str("q\n");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.operations.push_str("Q\n");
        self
    }

    pub(crate) fn take_operations(&mut self) -> String {
        std::mem::take(&mut self.operations)
    }
}
