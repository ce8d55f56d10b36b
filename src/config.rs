use std::path::Path;

use serde::{Deserialize, Serialize};

/// Estimated text metrics calibrated to the map's label font. The engine
/// never measures real glyphs; labels are short and a per-character
/// estimate keeps placement deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMetricsConfig {
    pub char_width: f32,
    pub line_height: f32,
    pub min_width: f32,
}

impl Default for TextMetricsConfig {
    fn default() -> Self {
        Self {
            char_width: 7.2,
            line_height: 7.2,
            min_width: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Padding added around a region's bounding box when framing the
    /// focused viewport.
    pub focus_padding: f32,
    /// Inner inset labels must keep from every viewport edge.
    pub label_edge_padding: f32,
    pub metrics: TextMetricsConfig,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            focus_padding: 12.0,
            label_edge_padding: 3.0,
            metrics: TextMetricsConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    focus_padding: Option<f32>,
    label_edge_padding: Option<f32>,
    char_width: Option<f32>,
    line_height: Option<f32>,
    min_label_width: Option<f32>,
}

/// Loads a JSON config overlay, merging present fields over the
/// defaults. `None` yields the defaults unchanged.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GeometryConfig> {
    let mut config = GeometryConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(v) = parsed.focus_padding {
        config.focus_padding = v;
    }
    if let Some(v) = parsed.label_edge_padding {
        config.label_edge_padding = v;
    }
    if let Some(v) = parsed.char_width {
        config.metrics.char_width = v;
    }
    if let Some(v) = parsed.line_height {
        config.metrics.line_height = v;
    }
    if let Some(v) = parsed.min_label_width {
        config.metrics.min_width = v;
    }

    Ok(config)
}
