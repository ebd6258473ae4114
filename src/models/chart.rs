//! Chart drawing models

use chrono::NaiveDate;

/// Fixed canvas size and the inner margin reserved for axes and labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl Dimensions {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 500;
    pub const PADDING: u32 = 100;

    /// Horizontal space shared by all bars
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width) - 2.0 * f64::from(self.padding)
    }

    /// Vertical pixel of the zero line
    pub fn baseline(&self) -> f64 {
        f64::from(self.height) - f64::from(self.padding)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            padding: Self::PADDING,
        }
    }
}

/// One rectangle per data point
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `data-date` attribute, `YYYY-MM-DD`
    pub date: String,
    /// `data-gdp` attribute, the raw value
    pub gdp: f64,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    /// Translation of the axis group: `(dx, dy)`
    pub offset: (f64, f64),
    /// Pixel range covered by the axis line
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees applied around the origin, as SVG `rotate()`
    pub rotate: Option<f64>,
}

impl Caption {
    /// Position on the canvas once the rotation is applied
    pub fn anchor(&self) -> (f64, f64) {
        match self.rotate {
            Some(deg) => {
                let rad = deg.to_radians();
                (
                    self.x * rad.cos() - self.y * rad.sin(),
                    self.x * rad.sin() + self.y * rad.cos(),
                )
            }
            None => (self.x, self.y),
        }
    }
}

/// A complete drawing of one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub x_domain: (NaiveDate, NaiveDate),
    pub y_domain: (f64, f64),
    pub bars: Vec<Bar>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub captions: Vec<Caption>,
}
