pub mod chart_service;
pub mod loader;
pub mod page_service;
pub mod scale;
