use crate::foundation::error::{BrickError, BrickResult};

/// Prefix every packed-marker attribute carries.
pub const DATA_PREFIX: &str = "data-";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A viewport-width threshold paired with a column count and gutter size.
pub struct BreakpointDescriptor {
    /// Minimum viewport width at which this descriptor applies.
    ///
    /// `None` marks a base descriptor that never matches on its own and is
    /// only used as the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Number of columns.
    pub columns: u32,
    /// Spacing between adjacent bricks and columns, in pixels.
    #[serde(default)]
    pub gutter: f64,
}

impl BreakpointDescriptor {
    /// Base descriptor without a width condition.
    pub fn base(columns: u32, gutter: f64) -> Self {
        Self {
            min_width: None,
            columns,
            gutter,
        }
    }

    /// Descriptor that applies from `min_width` pixels upward.
    pub fn at(min_width: f64, columns: u32, gutter: f64) -> Self {
        Self {
            min_width: Some(min_width),
            columns,
            gutter,
        }
    }

    /// Column count as an index-friendly `usize`, never below 1.
    pub fn column_count(&self) -> usize {
        usize::try_from(self.columns.max(1)).unwrap_or(1)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Packer configuration, supplied once at construction.
///
/// Breakpoints are declared narrowest first, as they would be written in a
/// stylesheet:
///
/// ```
/// let config = brickwork::PackerConfig::from_json_str(
///     r#"{ "sizes": [
///         { "columns": 1, "gutter": 10 },
///         { "min_width": 768, "columns": 3, "gutter": 10 }
///     ] }"#,
/// )
/// .unwrap();
/// assert_eq!(config.packed, "data-packed");
/// assert!(config.position);
/// ```
pub struct PackerConfig {
    /// Attribute marking bricks that already have a position.
    #[serde(default = "default_packed")]
    pub packed: String,
    /// Breakpoint descriptors, narrowest first.
    pub sizes: Vec<BreakpointDescriptor>,
    /// Write `top`/`left` offsets when `true`, a `translate3d` transform otherwise.
    #[serde(default = "default_position")]
    pub position: bool,
}

fn default_packed() -> String {
    format!("{DATA_PREFIX}packed")
}

fn default_position() -> bool {
    true
}

impl PackerConfig {
    /// Build a configuration from declared sizes, with default marker and positioning.
    pub fn new(sizes: Vec<BreakpointDescriptor>) -> Self {
        Self {
            packed: default_packed(),
            sizes,
            position: default_position(),
        }
    }

    /// Parse and normalize a JSON configuration. The result is validated.
    pub fn from_json_str(s: &str) -> BrickResult<Self> {
        let mut config: Self = serde_json::from_str(s)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> BrickResult<String> {
        serde_json::to_string_pretty(self).map_err(BrickError::from)
    }

    /// Ensure the packed marker carries the `data-` prefix.
    pub fn normalize(&mut self) {
        self.packed = normalize_packed(&self.packed);
    }

    /// Check that the configuration can drive a layout.
    pub fn validate(&self) -> BrickResult<()> {
        if self.sizes.is_empty() {
            return Err(BrickError::validation("sizes must contain at least one breakpoint"));
        }
        if self.packed.trim().is_empty() || self.packed == DATA_PREFIX {
            return Err(BrickError::validation("packed attribute name must be non-empty"));
        }

        let mut widest: Option<f64> = None;
        for (idx, size) in self.sizes.iter().enumerate() {
            if size.columns == 0 {
                return Err(BrickError::validation(format!(
                    "sizes[{idx}].columns must be > 0"
                )));
            }
            if !size.gutter.is_finite() || size.gutter < 0.0 {
                return Err(BrickError::validation(format!(
                    "sizes[{idx}].gutter must be finite and >= 0"
                )));
            }
            let Some(min_width) = size.min_width else {
                continue;
            };
            if !min_width.is_finite() || min_width < 0.0 {
                return Err(BrickError::validation(format!(
                    "sizes[{idx}].min_width must be finite and >= 0"
                )));
            }
            if let Some(prev) = widest
                && min_width < prev
            {
                return Err(BrickError::config(format!(
                    "sizes must be declared narrowest first: sizes[{idx}].min_width {min_width} < {prev}"
                )));
            }
            widest = Some(min_width);
        }
        Ok(())
    }

    /// Descriptors in scan order: widest declared first, base last.
    pub(crate) fn scan_order(&self) -> Vec<BreakpointDescriptor> {
        self.sizes.iter().rev().copied().collect()
    }
}

/// Prefix `name` with `data-` unless it already starts with it.
pub fn normalize_packed(name: &str) -> String {
    if name.starts_with(DATA_PREFIX) {
        name.to_string()
    } else {
        format!("{DATA_PREFIX}{name}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
