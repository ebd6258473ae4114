//! Load-then-draw pipeline and the state the page is built from

use tracing::{debug, info, warn};
use crate::api::gdp::GdpClient;
use crate::models::{Dataset, Dimensions, Surface, Tooltip};
use crate::services::chart_service::ChartMount;
use crate::services::loader;

/// Text shown in place of the chart when loading fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data";

/// `Idle -> Loading -> {Loaded -> Rendered, Failed}`
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Idle,
    Loading,
    /// Holds an empty dataset only; anything else is drawn immediately
    Loaded(Dataset),
    Rendered(Dataset),
    Failed(String),
}

/// What the page shows
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    /// Nothing fetched yet, or nothing to draw
    Blank,
    Chart(&'a Surface),
    Error(&'a str),
}

pub struct App {
    state: AppState,
    mount: ChartMount,
    tooltip: Tooltip,
    dimensions: Dimensions,
}

impl App {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            state: AppState::Idle,
            mount: ChartMount::new(),
            tooltip: Tooltip::new(),
            dimensions,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Load once, then draw
    ///
    /// Only the first call fetches; later calls are ignored.
    pub async fn run(&mut self, client: &GdpClient) {
        if self.state != AppState::Idle {
            warn!("GDP data already requested, ignoring run");
            return;
        }

        self.state = AppState::Loading;
        match loader::load(client).await {
            Ok(dataset) => self.set_dataset(dataset),
            Err(_) => {
                self.mount.clear();
                self.state = AppState::Failed(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Replace the dataset wholesale and redraw from it
    pub fn set_dataset(&mut self, dataset: Dataset) {
        if matches!(self.state, AppState::Failed(_)) {
            warn!("Ignoring dataset after a failed load");
            return;
        }

        if dataset.is_empty() {
            debug!("Empty dataset, nothing to draw");
            self.mount.clear();
            self.state = AppState::Loaded(dataset);
            return;
        }

        match self.mount.draw(&dataset, &self.dimensions) {
            Some(surface) => info!("Rendered {} bars", surface.bars.len()),
            None => warn!("Dataset produced no surface"),
        }
        self.state = AppState::Rendered(dataset);
    }

    /// Draw the current dataset again
    pub fn redraw(&mut self) {
        if let AppState::Rendered(dataset) = &self.state {
            self.mount.draw(dataset, &self.dimensions);
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            AppState::Failed(message) => View::Error(message),
            AppState::Rendered(_) => match self.mount.surface() {
                Some(surface) => View::Chart(surface),
                None => View::Blank,
            },
            _ => View::Blank,
        }
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.mount.surface()
    }

    /// Pointer entered bar `index`; returns false when there is no such bar
    pub fn hover_enter(&mut self, index: usize) -> bool {
        match self.mount.surface().and_then(|s| s.bars.get(index)) {
            Some(bar) => {
                self.tooltip.on_enter(bar);
                true
            }
            None => false,
        }
    }

    pub fn hover_move(&mut self, page_x: f64, page_y: f64) {
        self.tooltip.on_move(page_x, page_y);
    }

    pub fn hover_leave(&mut self) {
        self.tooltip.on_leave();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}
