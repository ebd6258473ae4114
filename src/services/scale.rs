//! Domain-to-pixel mappings for the two chart axes

use chrono::{Datelike, NaiveDate};
use crate::utils::format::format_grouped;

/// Default number of ticks asked from a scale
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Year steps tried, smallest first, when labeling a time axis
const YEAR_STEPS: [i32; 10] = [1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

fn interpolate(range: (f64, f64), t: f64) -> f64 {
    range.0 + (range.1 - range.0) * t
}

/// Linear mapping from calendar dates to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn map(&self, date: NaiveDate) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_days() as f64;
        if span == 0.0 {
            return interpolate(self.range, 0.5);
        }
        let offset = (date - self.domain.0).num_days() as f64;
        interpolate(self.range, offset / span)
    }

    /// January 1st of evenly spaced years inside the domain
    pub fn ticks(&self) -> Vec<NaiveDate> {
        let (start, end) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };

        let first_year = if start.ordinal() == 1 { start.year() } else { start.year() + 1 };
        let last_year = end.year();
        if first_year > last_year {
            return Vec::new();
        }

        let span = last_year - first_year;
        let step = YEAR_STEPS
            .iter()
            .copied()
            .find(|step| span / step < DEFAULT_TICK_COUNT as i32)
            .unwrap_or(YEAR_STEPS[YEAR_STEPS.len() - 1]);

        let aligned = first_year + (step - first_year.rem_euclid(step)) % step;
        (aligned..=last_year)
            .step_by(step as usize)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .collect()
    }

    pub fn tick_label(&self, date: NaiveDate) -> String {
        date.format("%Y").to_string()
    }
}

/// Linear mapping from values to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return interpolate(self.range, 0.5);
        }
        interpolate(self.range, (value - self.domain.0) / span)
    }

    /// Round-numbered ticks at a 1, 2 or 5 times power-of-ten step
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if !start.is_finite() || !stop.is_finite() || count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        match tick_increment(start, stop, count) {
            Increment::Step(step) => {
                let i0 = (start / step).ceil() as i64;
                let i1 = (stop / step).floor() as i64;
                (i0..=i1).map(|i| i as f64 * step).collect()
            }
            Increment::Inverse(inv) => {
                let i0 = (start * inv).ceil() as i64;
                let i1 = (stop * inv).floor() as i64;
                (i0..=i1).map(|i| i as f64 / inv).collect()
            }
        }
    }

    /// Label for a tick, with as many decimals as the tick step needs
    pub fn tick_label(&self, value: f64, count: usize) -> String {
        let decimals = match self.step(count) {
            Some(step) if step < 1.0 => (-step.log10().floor()).max(0.0) as usize,
            _ => 0,
        };
        format_grouped(value, decimals)
    }

    fn step(&self, count: usize) -> Option<f64> {
        let (start, stop) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        if start == stop || count == 0 {
            return None;
        }
        Some(match tick_increment(start, stop, count) {
            Increment::Step(step) => step,
            Increment::Inverse(inv) => 1.0 / inv,
        })
    }
}

/// Tick spacing; sub-unit steps are kept as their inverse to avoid drift
enum Increment {
    Step(f64),
    Inverse(f64),
}

fn tick_increment(start: f64, stop: f64, count: usize) -> Increment {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        Increment::Step(factor * 10f64.powf(power))
    } else {
        Increment::Inverse(10f64.powf(-power) / factor)
    }
}
