//! SVG serialization of a chart surface
//!
//! The markup follows the structure d3 axes produce (`g.tick` groups with a
//! `line` and a `text`), so pages built from it style and test the same way.

use std::fmt::Write;
use crate::models::{Axis, AxisOrient, Surface};
use super::format::format_coord;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Escape text for use in XML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_svg(surface: &Surface) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_svg(&mut out, surface);
    out
}

fn write_svg(out: &mut String, surface: &Surface) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        surface.width, surface.height
    )?;

    for bar in &surface.bars {
        writeln!(
            out,
            r#"  <rect class="bar" x="{}" y="{}" width="{}" height="{}" data-date="{}" data-gdp="{}"></rect>"#,
            format_coord(bar.x),
            format_coord(bar.y),
            format_coord(bar.width),
            format_coord(bar.height),
            escape(&bar.date),
            bar.gdp
        )?;
    }

    write_axis(out, &surface.x_axis)?;
    write_axis(out, &surface.y_axis)?;

    for caption in &surface.captions {
        let transform = match caption.rotate {
            Some(deg) => format!(r#" transform="rotate({})""#, format_coord(deg)),
            None => String::new(),
        };
        writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="middle"{} class="axis-label">{}</text>"#,
            format_coord(caption.x),
            format_coord(caption.y),
            transform,
            escape(&caption.text)
        )?;
    }

    writeln!(out, "</svg>")
}

fn write_axis(out: &mut String, axis: &Axis) -> std::fmt::Result {
    let (r0, r1) = (format_coord(axis.range.0), format_coord(axis.range.1));
    let (domain, anchor) = match axis.orient {
        AxisOrient::Bottom => (format!("M{},{}V0H{}V{}", r0, TICK_SIZE, r1, TICK_SIZE), "middle"),
        AxisOrient::Left => (format!("M-{},{}H0V{}H-{}", TICK_SIZE, r0, r1, TICK_SIZE), "end"),
    };

    writeln!(
        out,
        r#"  <g id="{}" transform="translate({}, {})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        axis.id,
        format_coord(axis.offset.0),
        format_coord(axis.offset.1),
        anchor
    )?;
    writeln!(out, r#"    <path class="domain" stroke="currentColor" d="{}"></path>"#, domain)?;

    for tick in &axis.ticks {
        let at = format_coord(tick.position);
        match axis.orient {
            AxisOrient::Bottom => writeln!(
                out,
                r#"    <g class="tick" opacity="1" transform="translate({},0)"><line stroke="currentColor" y2="{}"></line><text fill="currentColor" y="{}" dy="0.71em">{}</text></g>"#,
                at,
                TICK_SIZE,
                TICK_SIZE + TICK_PADDING,
                escape(&tick.label)
            )?,
            AxisOrient::Left => writeln!(
                out,
                r#"    <g class="tick" opacity="1" transform="translate(0,{})"><line stroke="currentColor" x2="-{}"></line><text fill="currentColor" x="-{}" dy="0.32em">{}</text></g>"#,
                at,
                TICK_SIZE,
                TICK_SIZE + TICK_PADDING,
                escape(&tick.label)
            )?,
        }
    }

    writeln!(out, "  </g>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::{DataPoint, Dataset, Dimensions};
    use crate::services::chart_service::render;

    fn surface() -> Surface {
        let dataset = Dataset::new(vec![
            DataPoint::new(NaiveDate::from_ymd_opt(1947, 1, 1).unwrap(), 243.1),
            DataPoint::new(NaiveDate::from_ymd_opt(1947, 4, 1).unwrap(), 246.3),
        ]);
        render(&dataset, &Dimensions::default()).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_svg_has_one_rect_per_bar() {
        let svg = render_svg(&surface());

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="500">"#));
        assert_eq!(svg.matches("<rect ").count(), 2);
        assert!(svg.contains(r#"x="100" y="103.898" width="300" height="296.102" data-date="1947-01-01" data-gdp="243.1""#));
        assert!(svg.contains(r#"data-date="1947-04-01" data-gdp="246.3""#));
    }

    #[test]
    fn test_svg_axes_and_labels() {
        let svg = render_svg(&surface());

        assert!(svg.contains(r#"<g id="x-axis" transform="translate(0, 400)""#));
        assert!(svg.contains(r#"<g id="y-axis" transform="translate(100, 0)""#));
        assert!(svg.contains(r#"dy="0.71em">1947</text>"#));
        assert!(svg.contains(r#"dy="0.32em">240</text>"#));
        assert!(svg.contains(r#"class="axis-label">Year</text>"#));
        assert!(svg.contains(r#"transform="rotate(-90)" class="axis-label">GDP (Billion USD)</text>"#));
    }
}
