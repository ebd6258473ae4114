//! Data and drawing models
//!
//! `dataset` holds what was fetched, `chart` what gets drawn, and `tooltip`
//! the hover state.

pub mod chart;
pub mod dataset;
pub mod tooltip;

pub use chart::{Axis, AxisOrient, Bar, Caption, Dimensions, Surface, Tick};
pub use dataset::{parse_date, DataPoint, Dataset};
pub use tooltip::{Tooltip, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};
