//! Recorded gesture scripts.

use crate::app::AppResult;
use kurbo::Point;
use scribble_core::PointerEvent;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded input step.
///
/// Tool names are kept as strings so that they are validated by the tool
/// picker when replayed, not when the script is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStep {
    Tool(String),
    Down(Point),
    Move(Point),
    Up(Point),
}

impl ScriptStep {
    /// Pointer event for this step, if it is one.
    pub fn to_event(&self) -> Option<PointerEvent> {
        match self {
            ScriptStep::Tool(_) => None,
            ScriptStep::Down(position) => Some(PointerEvent::Down { position: *position }),
            ScriptStep::Move(position) => Some(PointerEvent::Move { position: *position }),
            ScriptStep::Up(position) => Some(PointerEvent::Up { position: *position }),
        }
    }
}

/// Parse a JSON array of steps.
pub fn parse_script(json: &str) -> AppResult<Vec<ScriptStep>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a script file.
pub fn load_script(path: impl AsRef<Path>) -> AppResult<Vec<ScriptStep>> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let steps = parse_script(&json)?;
    log::debug!("Loaded {} steps from {:?}", steps.len(), path.as_ref());
    Ok(steps)
}
