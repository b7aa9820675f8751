use crate::{
    foundation::core::{Size, clamp_size},
    layout::placement::Placement,
};

/// One child of the container: its measured size, declared span and layout memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Brick {
    size: Size,
    span: Option<u32>,
    recorded_span: Option<u32>,
    packed: bool,
    placement: Option<Placement>,
}

impl Brick {
    /// Brick with a measured size and no declared span.
    pub fn new(size: Size) -> Self {
        Self {
            size: clamp_size(size),
            ..Self::default()
        }
    }

    /// Builder-style span declaration.
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = Some(span);
        self
    }

    /// Measured size, clamped to non-negative.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Record a fresh measurement.
    pub fn set_size(&mut self, size: Size) {
        self.size = clamp_size(size);
    }

    /// Declared span, if any.
    pub fn span(&self) -> Option<u32> {
        self.span
    }

    /// Change the declared span.
    ///
    /// Has no layout effect once the brick has been placed: the span captured
    /// on first placement is kept.
    pub fn set_span(&mut self, span: Option<u32>) {
        self.span = span;
    }

    /// Span captured on first placement.
    pub fn recorded_span(&self) -> Option<u32> {
        self.recorded_span
    }

    /// Whether the brick has been positioned by a pack or update.
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Most recent placement.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Whether this brick takes part in column height accumulation.
    pub fn is_solid(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }

    pub(crate) fn record_span(&mut self, span: u32) -> u32 {
        *self.recorded_span.get_or_insert(span)
    }

    pub(crate) fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
        self.packed = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/brick.rs"]
mod tests;
