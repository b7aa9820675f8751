use crate::{
    config::model::BreakpointDescriptor, foundation::core::Size, layout::columns::ColumnHeights,
};

/// Container extent after a pass.
///
/// Width assumes every column is as wide as `brick_width` (the last brick
/// placed). Height is the tallest column minus the gutter trailing its last
/// brick, never negative.
pub fn container_size(
    breakpoint: &BreakpointDescriptor,
    brick_width: f64,
    heights: &ColumnHeights,
) -> Size {
    let columns = breakpoint.column_count() as f64;
    let gutter = breakpoint.gutter;
    let width = columns * brick_width + (columns - 1.0) * gutter;
    let height = (heights.max() - gutter).max(0.0);
    Size::new(width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizer.rs"]
mod tests;
