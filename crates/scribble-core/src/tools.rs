//! Tool system for the sketch surface.

use crate::error::SketchError;
use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Selection,
    #[default]
    Line,
    Rectangle,
    Circle,
    #[serde(alias = "eclipse")]
    Ellipse,
}

impl ToolKind {
    /// All tools in tool-bar order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Selection,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Ellipse,
    ];

    /// Shape drawn by this tool, or `None` for the selection tool.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Selection => None,
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
        }
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Selection => "selection",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Ellipse => "ellipse",
        }
    }

    /// Display label for tool pickers.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Selection => "Selection",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Ellipse => "Ellipse",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" => Ok(ToolKind::Selection),
            "line" => Ok(ToolKind::Line),
            "rectangle" => Ok(ToolKind::Rectangle),
            "circle" => Ok(ToolKind::Circle),
            // Older tool bars spelled it this way.
            "ellipse" | "eclipse" => Ok(ToolKind::Ellipse),
            other => Err(SketchError::InvalidToolKind(other.to_string())),
        }
    }
}

impl From<ShapeKind> for ToolKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Circle => ToolKind::Circle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
        }
    }
}
