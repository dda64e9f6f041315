//! Canvas configuration.

use crate::error::CanvasResult;
use crate::shapes::{GraphicsStyle, SerializableColor, check_line_width};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Startup settings for a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Line width given to new objects.
    pub line_width: f64,
    /// Color given to new objects.
    pub object_color: SerializableColor,
    /// Switch back to the pointer tool once a creation gesture completes.
    pub return_to_pointer: bool,
    /// Tool active when the canvas is created.
    pub initial_tool: ToolKind,
}

impl CanvasConfig {
    /// Check values that deserialization alone cannot guarantee.
    pub fn validate(&self) -> CanvasResult<()> {
        check_line_width(self.line_width)
    }

    /// Style defaults described by this config.
    pub fn style(&self) -> GraphicsStyle {
        GraphicsStyle {
            line_width: self.line_width,
            color: self.object_color,
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        let style = GraphicsStyle::default();
        Self {
            line_width: style.line_width,
            object_color: style.color,
            return_to_pointer: true,
            initial_tool: ToolKind::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CanvasError;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert!((config.line_width - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.object_color, SerializableColor::accent());
        assert!(config.return_to_pointer);
        assert_eq!(config.initial_tool, ToolKind::Pointer);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{"line_width": 4.5, "initial_tool": "Line"}"#).unwrap();
        assert!((config.line_width - 4.5).abs() < f64::EPSILON);
        assert_eq!(config.initial_tool, ToolKind::Line);
        assert!(config.return_to_pointer);
        assert_eq!(config.object_color, SerializableColor::accent());
    }

    #[test]
    fn test_validate_line_width() {
        assert!(CanvasConfig::default().validate().is_ok());

        let config: CanvasConfig = serde_json::from_str(r#"{"line_width": -5.0}"#).unwrap();
        assert_eq!(config.validate(), Err(CanvasError::InvalidLineWidth(-5.0)));

        let zero = CanvasConfig {
            line_width: 0.0,
            ..CanvasConfig::default()
        };
        assert!(zero.validate().is_ok());
    }
}
