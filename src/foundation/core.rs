pub use kurbo::{Size, Vec2};

/// Clamp a measured length to a usable, non-negative value.
///
/// Negative and non-finite measurements are treated as zero.
pub fn clamp_length(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Clamp both dimensions of a measured size with [`clamp_length`].
pub fn clamp_size(size: Size) -> Size {
    Size::new(clamp_length(size.width), clamp_length(size.height))
}

/// Format a length as a CSS pixel value (`"110px"`, `"12.5px"`).
pub fn px(v: f64) -> String {
    // `0.0` and `-0.0` both print as `0px`.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}px")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
