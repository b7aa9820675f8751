use crate::layout::brick::Brick;

/// Span a brick asks for: its declared span, or 1 when missing or zero.
pub fn requested_span(declared: Option<u32>) -> u32 {
    declared.filter(|&s| s > 0).unwrap_or(1)
}

/// Effective span of `brick` when placed at `target` in a `columns`-wide grid.
///
/// The first placement records the requested span permanently; later passes
/// read the recorded value. The result is clamped to the columns remaining
/// right of `target` and is never widened beyond the recorded span.
pub fn resolve_span(brick: &mut Brick, columns: usize, target: usize) -> u32 {
    let recorded = match brick.recorded_span() {
        Some(span) => span,
        None => brick.record_span(requested_span(brick.span())),
    };
    let max_span = u32::try_from(columns.saturating_sub(target))
        .unwrap_or(u32::MAX)
        .max(1);
    recorded.min(max_span)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/span.rs"]
mod tests;
