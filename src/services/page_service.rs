use std::fmt::Write;
use crate::app::{App, View};
use crate::models::{Tooltip, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};
use crate::utils::format::format_coord;
use crate::utils::svg::{escape, render_svg};

pub const PAGE_TITLE: &str = "United States GDP";

/// Build the standalone HTML page for the current app state
///
/// The chart area holds either the SVG or the error text, never both. The
/// tooltip element is present in both cases and mirrors the app's tooltip.
pub fn render_page(app: &App) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut out, app);
    out
}

fn write_page(out: &mut String, app: &App) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="utf-8">"#)?;
    writeln!(out, "<title>{}</title>", escape(PAGE_TITLE))?;
    writeln!(out, "<style>")?;
    writeln!(out, "  .bar {{ fill: steelblue; }}")?;
    writeln!(out, "  .bar:hover {{ fill: orange; }}")?;
    writeln!(out, "  #tooltip {{ background: #fff; border: 1px solid #ccc; padding: 4px 8px; pointer-events: none; font: 12px sans-serif; }}")?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"<div id="main">"#)?;
    writeln!(out, r#"<h1 id="title">{}</h1>"#, escape(PAGE_TITLE))?;

    match app.view() {
        View::Chart(surface) => {
            writeln!(out, r#"<div id="chart">"#)?;
            out.push_str(&render_svg(surface));
            writeln!(out, "</div>")?;
        }
        View::Error(message) => {
            writeln!(out, r#"<p style="color: red;">{}</p>"#, escape(message))?;
        }
        View::Blank => {
            writeln!(out, r#"<div id="chart"></div>"#)?;
        }
    }

    writeln!(out, "</div>")?;
    write_tooltip(out, app.tooltip())?;
    writeln!(out, "<script>")?;
    out.push_str(&hover_script());
    writeln!(out, "</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_tooltip(out: &mut String, tooltip: &Tooltip) -> std::fmt::Result {
    let mut style = String::from("position: absolute;");
    if tooltip.visible {
        write!(
            style,
            " display: block; left: {}px; top: {}px;",
            format_coord(tooltip.left),
            format_coord(tooltip.top)
        )?;
    } else {
        style.push_str(" display: none;");
    }

    let date_attr = tooltip
        .date
        .as_ref()
        .map(|date| format!(r#" data-date="{}""#, escape(date)))
        .unwrap_or_default();
    let body = tooltip.lines().map(escape).collect::<Vec<_>>().join("<br>");

    writeln!(out, r#"<div id="tooltip" style="{}"{}>{}</div>"#, style, date_attr, body)
}

/// Pointer wiring matching `Tooltip`: same text, same offsets
fn hover_script() -> String {
    format!(
        r##"(function () {{
  var tooltip = document.getElementById("tooltip");
  document.querySelectorAll("#chart rect.bar").forEach(function (bar) {{
    bar.addEventListener("mouseover", function () {{
      var date = bar.getAttribute("data-date");
      var gdp = parseFloat(bar.getAttribute("data-gdp"));
      tooltip.innerHTML = "Year: " + date.slice(0, 4) + "<br>GDP: $" + gdp.toFixed(1) + " Billion";
      tooltip.setAttribute("data-date", date);
      tooltip.style.display = "block";
    }});
    bar.addEventListener("mousemove", function (event) {{
      tooltip.style.left = (event.pageX + {dx}) + "px";
      tooltip.style.top = (event.pageY + {dy}) + "px";
    }});
    bar.addEventListener("mouseout", function () {{
      tooltip.style.display = "none";
    }});
  }});
}})();
"##,
        dx = TOOLTIP_OFFSET_X,
        dy = TOOLTIP_OFFSET_Y,
    )
}
