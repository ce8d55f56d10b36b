use crate::config::TextMetricsConfig;

/// Estimated rendered width of a single-line label.
///
/// Counts characters, not bytes - CJK city names are the common case
/// here and each character advances roughly one `char_width`.
pub fn estimated_text_width(text: &str, metrics: &TextMetricsConfig) -> f32 {
    (text.chars().count() as f32 * metrics.char_width).max(metrics.min_width)
}

/// Estimated rendered height of a single-line label.
pub fn estimated_text_height(metrics: &TextMetricsConfig) -> f32 {
    metrics.line_height
}
