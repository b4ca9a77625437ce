pub mod app_config;
pub mod notification;
pub mod oauth;

pub use app_config::{AppConfig, AppState};
