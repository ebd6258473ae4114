use super::chart::Bar;
use crate::utils::format::format_one_decimal;

/// Horizontal distance from the pointer to the tooltip's left edge
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
/// Vertical distance from the pointer to the tooltip's top edge
pub const TOOLTIP_OFFSET_Y: f64 = -50.0;

/// The single floating tooltip
///
/// Hidden until a bar is hovered. Only pointer events change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Mirrors the `data-date` of the hovered bar
    pub date: Option<String>,
    pub left: f64,
    pub top: f64,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(&mut self, bar: &Bar) {
        self.visible = true;
        self.text = tooltip_text(bar.year, bar.gdp);
        self.date = Some(bar.date.clone());
    }

    pub fn on_move(&mut self, page_x: f64, page_y: f64) {
        self.left = page_x + TOOLTIP_OFFSET_X;
        self.top = page_y + TOOLTIP_OFFSET_Y;
    }

    /// Hide; text and date stay until the next hover
    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Two-line tooltip body for a reading
pub fn tooltip_text(year: i32, gdp: f64) -> String {
    format!("Year: {}\nGDP: ${} Billion", year, format_one_decimal(gdp))
}
