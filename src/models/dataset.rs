//! GDP readings in the order the resource delivered them

use chrono::{Datelike, NaiveDate};

/// One quarter's GDP reading, in billions of USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// `YYYY-MM-DD`, the form used for `data-date` attributes
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Ordered sequence of readings
///
/// Order is kept exactly as received and determines bar order. A new fetch
/// replaces the whole dataset; points are never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Earliest and latest date over all points
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.points.iter().map(|p| p.date).min()?;
        let max = self.points.iter().map(|p| p.date).max()?;
        Some((min, max))
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Parse the date cell of a GDP pair
///
/// Accepts `YYYY-MM-DD`, anything that starts with it (`1947-01-01T00:00:00Z`),
/// and a bare four-digit year, which means January 1st of that year.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if text.len() == 4 && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok().and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1));
    }

    let day = text.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
