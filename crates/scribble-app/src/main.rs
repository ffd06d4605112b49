//! Headless replay entry point.

use scribble_app::{App, AppConfig, AppError, AppResult, load_script};
use std::process::ExitCode;

const USAGE: &str = "scribble <script.json> <out.svg> [config.json]";

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let mut args = std::env::args().skip(1);
    let (Some(script_path), Some(output_path)) = (args.next(), args.next()) else {
        return Err(AppError::Usage(USAGE.to_string()));
    };
    let config = match args.next() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    log::info!("Starting {}", config.title);
    let steps = load_script(&script_path)?;

    let mut app = App::new(config);
    app.replay(&steps)?;
    log::info!(
        "Replayed {} steps into {} shapes",
        steps.len(),
        app.shape_count()
    );

    app.export(&output_path)
}
