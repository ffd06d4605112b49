//! Headless application shell.

use crate::config::AppConfig;
use crate::script::ScriptStep;
use scribble_core::{InteractionController, InteractionSession, SketchError};
use scribble_render::{RendererError, SvgSurface};
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Sketch(#[from] SketchError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Usage: {0}")]
    Usage(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Main application struct.
pub struct App {
    config: AppConfig,
    session: InteractionSession,
    controller: InteractionController<SvgSurface>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let surface = SvgSurface::new(config.surface_style(), config.rough.clone());
        Self {
            session: InteractionSession::new(config.initial_tool),
            controller: InteractionController::new(surface),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn controller(&self) -> &InteractionController<SvgSurface> {
        &self.controller
    }

    pub fn shape_count(&self) -> usize {
        self.controller.store().len()
    }

    /// Apply one recorded step.
    pub fn apply(&mut self, step: &ScriptStep) -> AppResult<()> {
        match step {
            ScriptStep::Tool(name) => {
                self.session.set_tool_by_name(name)?;
                log::debug!("Tool: {}", self.session.tool());
            }
            ScriptStep::Down(position) => {
                self.controller.pointer_down(&mut self.session, *position);
            }
            ScriptStep::Move(position) => {
                self.controller.pointer_move(&mut self.session, *position);
            }
            ScriptStep::Up(_) => self.controller.pointer_up(&mut self.session),
        }
        Ok(())
    }

    /// Apply every step in order, stopping at the first invalid one.
    pub fn replay(&mut self, steps: &[ScriptStep]) -> AppResult<()> {
        for (index, step) in steps.iter().enumerate() {
            self.apply(step).inspect_err(|err| {
                log::error!("Step {} failed: {}", index, err);
            })?;
        }
        Ok(())
    }

    /// Write the current surface to `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> AppResult<()> {
        self.controller.bridge().write_svg(path)?;
        Ok(())
    }
}
