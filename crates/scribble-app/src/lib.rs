//! Scribble Application
//!
//! Headless host for the sketch core: loads configuration, replays recorded
//! gestures through the interaction controller and exports the surface.

mod app;
mod config;
mod script;

pub use app::{App, AppError, AppResult};
pub use config::AppConfig;
pub use script::{ScriptStep, load_script, parse_script};
