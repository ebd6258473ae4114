use std::fs;
use std::path::Path;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

use gdp_chart::api::gdp::GdpClient;
use gdp_chart::app::App;
use gdp_chart::config::Config;
use gdp_chart::models::Dimensions;
use gdp_chart::services::{chart_service, page_service};
use gdp_chart::utils::errors::ChartError;
use gdp_chart::utils::svg::render_svg;

fn write_file(path: &Path, contents: &str) -> Result<(), ChartError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Write every configured output for the current app state
fn write_outputs(app: &App, config: &Config) -> Result<(), ChartError> {
    write_file(&config.html_path, &page_service::render_page(app))?;
    info!("Wrote page to {}", config.html_path.display());

    match app.surface() {
        Some(surface) => {
            if let Some(svg_path) = &config.svg_path {
                write_file(svg_path, &render_svg(surface))?;
                info!("Wrote SVG chart to {}", svg_path.display());
            }
            if let Some(png_path) = &config.png_path {
                chart_service::rasterize(surface, png_path)?;
            }
        }
        None => {
            if config.svg_path.is_some() || config.png_path.is_some() {
                warn!("No chart was drawn, skipping SVG/PNG output");
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("gdp_chart=debug".parse().unwrap()))
        .with_target(true)
        .init();

    info!("📊 Starting GDP chart...");

    let config = Config::from_env();
    let client = GdpClient::with_url(config.data_url.clone());

    let mut app = App::new(Dimensions::default());
    app.run(&client).await;

    if let Err(e) = write_outputs(&app, &config) {
        error!("Failed to write chart: {}", e);
        std::process::exit(1);
    }
}
