//! Application service layer - lot orchestration, scenario replay, config

pub mod app;
pub mod config;
