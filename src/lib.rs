//! US GDP bar chart: fetch the dataset once, draw it, write it out.
//!
//! `services::loader::load` produces a [`models::Dataset`],
//! `services::chart_service::render` turns it into a [`models::Surface`], and
//! [`app::App`] ties the two together with the hover tooltip.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod test_util;
