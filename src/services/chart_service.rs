use std::path::Path;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::{debug, info};
use crate::models::{Axis, AxisOrient, Bar, Caption, Dataset, Dimensions, Surface, Tick};
use crate::services::scale::{LinearScale, TimeScale, DEFAULT_TICK_COUNT};
use crate::utils::errors::ChartError;

pub const X_CAPTION: &str = "Year";
pub const Y_CAPTION: &str = "GDP (Billion USD)";

/// Distance of both captions from the canvas edge they sit along
const CAPTION_INSET: f64 = 50.0;
const TICK_SIZE: i32 = 6;

/// Project a dataset onto a fresh surface
///
/// Returns `None` for an empty dataset, which has no scale domain.
pub fn render(dataset: &Dataset, dims: &Dimensions) -> Option<Surface> {
    let x_domain = dataset.date_extent()?;
    let max_value = dataset.max_value()?;

    let width = f64::from(dims.width);
    let height = f64::from(dims.height);
    let padding = f64::from(dims.padding);

    let x_scale = TimeScale::new(x_domain, (padding, width - padding));
    // Bars grow from zero, not from the smallest reading
    let y_scale = LinearScale::new((0.0, max_value), (height - padding, padding));

    let bar_width = dims.plot_width() / dataset.len() as f64;
    let baseline = dims.baseline();

    let bars = dataset
        .iter()
        .map(|point| {
            let y = y_scale.map(point.value);
            Bar {
                x: x_scale.map(point.date),
                y,
                width: bar_width,
                height: baseline - y,
                date: point.iso_date(),
                gdp: point.value,
                year: point.year(),
            }
        })
        .collect();

    let x_axis = Axis {
        id: "x-axis",
        orient: AxisOrient::Bottom,
        offset: (0.0, baseline),
        range: x_scale.range(),
        ticks: x_scale
            .ticks()
            .into_iter()
            .map(|date| Tick {
                position: x_scale.map(date),
                label: x_scale.tick_label(date),
            })
            .collect(),
    };

    let y_axis = Axis {
        id: "y-axis",
        orient: AxisOrient::Left,
        offset: (padding, 0.0),
        range: y_scale.range(),
        ticks: y_scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                position: y_scale.map(value),
                label: y_scale.tick_label(value, DEFAULT_TICK_COUNT),
            })
            .collect(),
    };

    let captions = vec![
        Caption {
            text: X_CAPTION.to_string(),
            x: width / 2.0,
            y: height - CAPTION_INSET,
            rotate: None,
        },
        Caption {
            text: Y_CAPTION.to_string(),
            x: -height / 2.0,
            y: CAPTION_INSET,
            rotate: Some(-90.0),
        },
    ];

    Some(Surface {
        width: dims.width,
        height: dims.height,
        x_domain,
        y_domain: y_scale.domain(),
        bars,
        x_axis,
        y_axis,
        captions,
    })
}

/// Handle to the chart mount point
///
/// Sole owner of the current drawing. Every draw discards the previous
/// surface before building the next one, so a redraw never leaves stale bars.
#[derive(Debug, Default)]
pub struct ChartMount {
    surface: Option<Surface>,
}

impl ChartMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, dataset: &Dataset, dims: &Dimensions) -> Option<&Surface> {
        self.clear();
        self.surface = render(dataset, dims);
        match &self.surface {
            Some(surface) => debug!("Drew {} bars", surface.bars.len()),
            None => debug!("Nothing to draw for an empty dataset"),
        }
        self.surface.as_ref()
    }

    pub fn clear(&mut self) {
        self.surface = None;
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

/// Rasterize a surface to a PNG file
pub fn rasterize(surface: &Surface, path: &Path) -> Result<(), ChartError> {
    let backend = BitMapBackend::new(path, (surface.width, surface.height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

    let bar_color = RGBColor(70, 130, 180);
    for bar in &surface.bars {
        root.draw(&Rectangle::new(
            [(px(bar.x), px(bar.y)), (px(bar.x + bar.width), px(bar.y + bar.height))],
            bar_color.filled(),
        ))
        .map_err(|e| ChartError::Render(format!("Failed to draw bar {}: {}", bar.date, e)))?;
    }

    draw_axis(&root, &surface.x_axis)?;
    draw_axis(&root, &surface.y_axis)?;

    for caption in &surface.captions {
        let (x, y) = caption.anchor();
        let mut font = ("sans-serif", 16).into_font();
        if caption.rotate.is_some() {
            font = font.transform(FontTransform::Rotate270);
        }
        let style = TextStyle::from(font).pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(caption.text.as_str(), (px(x), px(y)), style))
            .map_err(|e| ChartError::Render(format!("Failed to draw caption: {}", e)))?;
    }

    root.present()
        .map_err(|e| ChartError::Render(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Wrote PNG chart to {}", path.display());
    Ok(())
}

fn draw_axis<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    axis: &Axis,
) -> Result<(), ChartError> {
    let (dx, dy) = (px(axis.offset.0), px(axis.offset.1));
    let (r0, r1) = (px(axis.range.0), px(axis.range.1));

    let line = match axis.orient {
        AxisOrient::Bottom => vec![(r0, dy), (r1, dy)],
        AxisOrient::Left => vec![(dx, r0), (dx, r1)],
    };
    root.draw(&PathElement::new(line, &BLACK))
        .map_err(|e| ChartError::Render(format!("Failed to draw {}: {}", axis.id, e)))?;

    for tick in &axis.ticks {
        let at = px(tick.position);
        let (mark, label_at, pos) = match axis.orient {
            AxisOrient::Bottom => (
                vec![(at, dy), (at, dy + TICK_SIZE)],
                (at, dy + TICK_SIZE + 3),
                Pos::new(HPos::Center, VPos::Top),
            ),
            AxisOrient::Left => (
                vec![(dx - TICK_SIZE, at), (dx, at)],
                (dx - TICK_SIZE - 3, at),
                Pos::new(HPos::Right, VPos::Center),
            ),
        };
        root.draw(&PathElement::new(mark, &BLACK))
            .map_err(|e| ChartError::Render(format!("Failed to draw tick: {}", e)))?;

        let style = TextStyle::from(("sans-serif", 12).into_font()).pos(pos);
        root.draw(&Text::new(tick.label.as_str(), label_at, style))
            .map_err(|e| ChartError::Render(format!("Failed to draw tick label: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::DataPoint;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn two_quarters() -> Dataset {
        Dataset::new(vec![
            DataPoint::new(date(1947, 1, 1), 243.1),
            DataPoint::new(date(1947, 4, 1), 246.3),
        ])
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            DataPoint::new(date(1947, 1, 1), 243.1),
            DataPoint::new(date(1947, 4, 1), 246.3),
            DataPoint::new(date(1947, 7, 1), 250.1),
            DataPoint::new(date(1947, 10, 1), 260.3),
            DataPoint::new(date(1948, 1, 1), 266.2),
            DataPoint::new(date(1948, 4, 1), 272.9),
        ])
    }

    #[test]
    fn test_two_quarter_scenario() {
        let surface = render(&two_quarters(), &Dimensions::default()).expect("surface");

        assert_eq!(surface.bars.len(), 2);
        assert!(surface.bars.iter().all(|b| b.width == 300.0));
        assert_eq!(surface.x_domain, (date(1947, 1, 1), date(1947, 4, 1)));
        assert_eq!(surface.y_domain, (0.0, 246.3));
        assert!(surface.bars[1].height > surface.bars[0].height);
        assert_eq!(surface.bars[0].x, 100.0);
        assert_eq!(surface.bars[1].x, 700.0);
        assert_eq!(surface.bars[1].y, 100.0);
        assert_eq!(surface.bars[1].height, 300.0);
    }

    #[test]
    fn test_one_bar_per_point_with_matching_dates() {
        let dataset = sample();
        let surface = render(&dataset, &Dimensions::default()).expect("surface");

        assert_eq!(surface.bars.len(), dataset.len());
        for (bar, point) in surface.bars.iter().zip(dataset.iter()) {
            assert_eq!(bar.date, point.iso_date());
            assert_eq!(bar.gdp, point.value);
        }
    }

    #[test]
    fn test_height_grows_with_value() {
        let surface = render(&sample(), &Dimensions::default()).expect("surface");
        let mut bars = surface.bars.clone();
        bars.sort_by(|a, b| a.gdp.partial_cmp(&b.gdp).unwrap());

        for pair in bars.windows(2) {
            assert!(pair[0].gdp < pair[1].gdp);
            assert!(pair[0].height < pair[1].height);
        }
    }

    #[test]
    fn test_x_strictly_increases_with_date() {
        let surface = render(&sample(), &Dimensions::default()).expect("surface");
        for pair in surface.bars.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn test_bars_keep_received_order() {
        let dataset = Dataset::new(vec![
            DataPoint::new(date(1948, 1, 1), 266.2),
            DataPoint::new(date(1947, 1, 1), 243.1),
        ]);
        let surface = render(&dataset, &Dimensions::default()).expect("surface");

        assert_eq!(surface.bars[0].date, "1948-01-01");
        assert_eq!(surface.bars[1].date, "1947-01-01");
        assert!(surface.bars[0].x > surface.bars[1].x);
    }

    #[test]
    fn test_axes_and_captions() {
        let surface = render(&sample(), &Dimensions::default()).expect("surface");

        assert_eq!(surface.x_axis.id, "x-axis");
        assert_eq!(surface.x_axis.offset, (0.0, 400.0));
        assert_eq!(surface.y_axis.id, "y-axis");
        assert_eq!(surface.y_axis.offset, (100.0, 0.0));
        assert_eq!(
            surface.x_axis.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(),
            vec!["1947", "1948"]
        );
        assert_eq!(surface.y_axis.ticks.first().map(|t| t.position), Some(400.0));

        assert_eq!(surface.captions.len(), 2);
        assert_eq!(surface.captions[0].text, X_CAPTION);
        assert_eq!((surface.captions[0].x, surface.captions[0].y), (400.0, 450.0));
        assert_eq!(surface.captions[1].text, Y_CAPTION);
        assert_eq!(surface.captions[1].rotate, Some(-90.0));
    }

    #[test]
    fn test_empty_dataset_renders_nothing() {
        assert!(render(&Dataset::default(), &Dimensions::default()).is_none());
    }

    #[test]
    fn test_rasterize_bars_and_axis_lines() {
        let mut surface = render(&sample(), &Dimensions::default()).expect("surface");
        // text needs system fonts; keep only bars and axis lines
        surface.x_axis.ticks.clear();
        surface.y_axis.ticks.clear();
        surface.captions.clear();

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gdp.png");
        rasterize(&surface, &path).expect("rasterize failed");

        let bytes = std::fs::read(&path).expect("png not written");
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_redraw_replaces_previous_surface() {
        let mut mount = ChartMount::new();
        let dims = Dimensions::default();

        mount.draw(&sample(), &dims);
        mount.draw(&sample(), &dims);
        assert_eq!(mount.surface().map(|s| s.bars.len()), Some(6));

        mount.draw(&two_quarters(), &dims);
        assert_eq!(mount.surface().map(|s| s.bars.len()), Some(2));

        mount.draw(&Dataset::default(), &dims);
        assert!(mount.surface().is_none());
    }
}
