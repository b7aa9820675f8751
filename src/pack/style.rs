use crate::{
    foundation::core::{Size, px},
    layout::placement::Placement,
};

/// Attribute carrying a brick's effective span.
pub const SPAN_ATTRIBUTE: &str = "data-span";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// How a brick's offset is written.
pub enum Offset {
    /// `top` / `left` positional offsets.
    TopLeft {
        /// Offset from the container's top edge.
        top: f64,
        /// Offset from the container's left edge.
        left: f64,
    },
    /// A `translate3d(x, y, 0)` transform.
    Translate3d {
        /// Horizontal translation.
        x: f64,
        /// Vertical translation.
        y: f64,
    },
}

impl Offset {
    /// Offset for `placement`, positional when `position` is set.
    pub fn for_placement(placement: &Placement, position: bool) -> Self {
        if position {
            Self::TopLeft {
                top: placement.top,
                left: placement.left,
            }
        } else {
            let v = placement.offset();
            Self::Translate3d { x: v.x, y: v.y }
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Visual output for one placed brick.
pub struct BrickStyle {
    /// Offset inside the container.
    pub offset: Offset,
    /// Effective span.
    pub span: u32,
    /// Marker attribute flagging the brick as packed.
    pub packed_attribute: String,
}

impl BrickStyle {
    /// CSS declarations, in the order they should be applied.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![("position", "absolute".to_string())];
        match self.offset {
            Offset::TopLeft { top, left } => {
                out.push(("top", px(top)));
                out.push(("left", px(left)));
            }
            Offset::Translate3d { x, y } => {
                out.push(("transform", format!("translate3d({}, {}, 0)", px(x), px(y))));
            }
        }
        out
    }

    /// Attributes to set on the brick element.
    pub fn attributes(&self) -> Vec<(String, String)> {
        vec![
            (SPAN_ATTRIBUTE.to_string(), self.span.to_string()),
            (self.packed_attribute.clone(), String::new()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Visual output for the container after a pass.
pub struct ContainerStyle {
    /// Container extent.
    pub size: Size,
}

impl ContainerStyle {
    /// CSS declarations for the container.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "relative".to_string()),
            ("width", px(self.size.width)),
            ("height", px(self.size.height)),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/style.rs"]
mod tests;
