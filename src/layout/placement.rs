use crate::{
    config::model::BreakpointDescriptor,
    foundation::core::Vec2,
    layout::{
        brick::Brick,
        columns::{ColumnHeights, Occupant},
        span::resolve_span,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Where a brick landed.
pub struct Placement {
    /// Distance from the container's top edge.
    pub top: f64,
    /// Distance from the container's left edge.
    pub left: f64,
    /// Number of columns covered.
    pub span: u32,
    /// Leftmost column covered.
    pub column: usize,
}

impl Placement {
    /// Offset as an `(x, y)` vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A placement together with the brick's index in source order.
pub struct PlacedBrick {
    /// Position of the brick among all children of the container.
    pub index: usize,
    /// Resulting placement.
    pub placement: Placement,
}

/// Place the bricks at `pending` (ascending source indices) on top of `heights`.
///
/// `bricks` holds every child in source order, placed or not; indices in
/// `pending` refer into it. Column heights are mutated in place.
pub fn place_bricks(
    bricks: &mut [Brick],
    pending: &[usize],
    heights: &mut ColumnHeights,
    breakpoint: &BreakpointDescriptor,
) -> Vec<PlacedBrick> {
    let gutter = breakpoint.gutter;
    let columns = heights.len();
    let mut placed = Vec::with_capacity(pending.len());

    for &index in pending {
        if index >= bricks.len() {
            continue;
        }

        let column = heights.min();
        let span = resolve_span(&mut bricks[index], columns, column);
        let brick = &mut bricks[index];
        let column_width = per_column_width(brick.size().width, span, gutter);

        let placement = Placement {
            top: heights.get(column),
            left: left_offset(heights, column, gutter, column_width),
            span,
            column,
        };
        brick.place(placement);

        // Bricks without area are positioned but never raise a column.
        if brick.is_solid() {
            let amount = brick.size().height + gutter;
            if span > 1 {
                heights.add_range(column, span as usize, amount);
            } else {
                heights.add(column, amount);
            }
            heights.occupy(
                column,
                span as usize,
                Occupant {
                    brick: index,
                    column_width,
                },
            );
        }

        tracing::trace!(
            index,
            column,
            span,
            top = placement.top,
            left = placement.left,
            "placed brick"
        );
        placed.push(PlacedBrick { index, placement });
    }

    placed
}

/// Width of one column's share of a brick covering `span` columns.
pub fn per_column_width(width: f64, span: u32, gutter: f64) -> f64 {
    let span = f64::from(span.max(1));
    ((width - (span - 1.0) * gutter) / span).max(0.0)
}

/// Horizontal offset of `column`: the widths (plus gutter) of the bricks on
/// top of every column to its left.
///
/// A brick spanning several columns contributes its per-column share to each
/// of them. Columns no solid brick has reached yet count as
/// `fallback_width`. Column 0 is always at `+0.0`.
pub fn left_offset(
    heights: &ColumnHeights,
    column: usize,
    gutter: f64,
    fallback_width: f64,
) -> f64 {
    (0..column)
        .map(|j| {
            heights
                .occupant(j)
                .map_or(fallback_width, |o| o.column_width)
                + gutter
        })
        .fold(0.0, |acc, w| acc + w)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
