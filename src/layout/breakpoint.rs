use crate::{
    config::model::{BreakpointDescriptor, PackerConfig},
    foundation::error::{BrickError, BrickResult},
};

/// Width-matching capability of the host viewport (the `min-width` media query).
pub trait Viewport {
    /// Whether the viewport is currently at least `min_width` pixels wide.
    fn matches_min_width(&self, min_width: f64) -> bool;
}

/// Viewport with a fixed, settable width. Used by headless hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FixedViewport {
    /// Current viewport width in pixels.
    pub width: f64,
}

impl FixedViewport {
    /// Viewport of the given width.
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Change the width, as a window resize would.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }
}

impl Viewport for FixedViewport {
    fn matches_min_width(&self, min_width: f64) -> bool {
        self.width >= min_width
    }
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn matches_min_width(&self, min_width: f64) -> bool {
        (**self).matches_min_width(min_width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// The descriptor currently in effect and its position in scan order.
pub struct ActiveBreakpoint {
    /// Index into the widest-first scan order.
    pub index: usize,
    /// The selected descriptor.
    pub descriptor: BreakpointDescriptor,
}

/// Breakpoint descriptors held widest first, ready for resolution.
#[derive(Clone, Debug)]
pub struct Breakpoints {
    scan: Vec<BreakpointDescriptor>,
}

impl Breakpoints {
    /// Take the sizes of a configuration, reversing them into scan order.
    pub fn from_config(config: &PackerConfig) -> BrickResult<Self> {
        config.validate()?;
        Self::from_scan_order(config.scan_order())
    }

    /// Use descriptors that are already ordered widest first.
    pub fn from_scan_order(scan: Vec<BreakpointDescriptor>) -> BrickResult<Self> {
        if scan.is_empty() {
            return Err(BrickError::validation("at least one breakpoint is required"));
        }
        Ok(Self { scan })
    }

    /// Descriptors in scan order.
    pub fn as_slice(&self) -> &[BreakpointDescriptor] {
        &self.scan
    }

    /// Index of the widest descriptor whose `min_width` holds.
    ///
    /// Falls back to the last entry (the narrowest, base descriptor) when
    /// nothing matches.
    pub fn resolve_index(&self, viewport: &impl Viewport) -> usize {
        self.scan
            .iter()
            .position(|size| {
                size.min_width
                    .is_some_and(|min_width| viewport.matches_min_width(min_width))
            })
            .unwrap_or(self.scan.len() - 1)
    }

    /// Resolve the active breakpoint for the viewport.
    pub fn resolve(&self, viewport: &impl Viewport) -> ActiveBreakpoint {
        let index = self.resolve_index(viewport);
        ActiveBreakpoint {
            index,
            descriptor: self.scan[index],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/breakpoint.rs"]
mod tests;
