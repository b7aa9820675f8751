use crate::{
    config::model::{BreakpointDescriptor, PackerConfig, normalize_packed},
    foundation::error::BrickResult,
};

/// Fluent builder for [`PackerConfig`]; `build` normalizes and validates.
pub struct PackerConfigBuilder {
    packed: String,
    sizes: Vec<BreakpointDescriptor>,
    position: bool,
}

impl Default for PackerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackerConfigBuilder {
    /// Start from the defaults: `data-packed` marker, positional offsets, no sizes.
    pub fn new() -> Self {
        Self {
            packed: normalize_packed("packed"),
            sizes: Vec::new(),
            position: true,
        }
    }

    /// Marker attribute for placed bricks; `data-` is prepended if missing.
    pub fn packed(mut self, name: impl AsRef<str>) -> Self {
        self.packed = normalize_packed(name.as_ref());
        self
    }

    /// Append a breakpoint. Declare them narrowest first.
    pub fn size(mut self, size: BreakpointDescriptor) -> Self {
        self.sizes.push(size);
        self
    }

    /// Append a base size without a width condition.
    pub fn base(self, columns: u32, gutter: f64) -> Self {
        self.size(BreakpointDescriptor::base(columns, gutter))
    }

    /// Append a size applying from `min_width` upward.
    pub fn at(self, min_width: f64, columns: u32, gutter: f64) -> Self {
        self.size(BreakpointDescriptor::at(min_width, columns, gutter))
    }

    /// Use `top`/`left` offsets (`true`) or a `translate3d` transform (`false`).
    pub fn position(mut self, position: bool) -> Self {
        self.position = position;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> BrickResult<PackerConfig> {
        let config = PackerConfig {
            packed: self.packed,
            sizes: self.sizes,
            position: self.position,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/dsl.rs"]
mod tests;
