use crate::{
    foundation::core::Size,
    layout::brick::Brick,
    pack::style::{BrickStyle, ContainerStyle},
};

/// The element holding the bricks.
///
/// Implementations own the brick records in source order and receive the
/// visual output of each pass. Measuring bricks is the host's job: update
/// sizes through [`Container::bricks_mut`] before packing.
pub trait Container {
    /// Every child brick, in source order.
    fn bricks(&self) -> &[Brick];

    /// Mutable access to every child brick, in source order.
    fn bricks_mut(&mut self) -> &mut [Brick];

    /// Apply the style of the brick at `index` after it was placed.
    fn apply_brick_style(&mut self, index: usize, style: &BrickStyle) {
        let _ = (index, style);
    }

    /// Apply the container style after a pass that placed at least one brick.
    fn apply_container_style(&mut self, style: &ContainerStyle) {
        let _ = style;
    }

    /// Source indices of bricks not yet marked packed.
    fn unpacked(&self) -> Vec<usize> {
        self.bricks()
            .iter()
            .enumerate()
            .filter(|(_, b)| !b.is_packed())
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// In-memory container that keeps the last style applied to everything.
#[derive(Clone, Debug, Default)]
pub struct Wall {
    bricks: Vec<Brick>,
    styles: Vec<Option<BrickStyle>>,
    container_style: Option<ContainerStyle>,
}

impl Wall {
    /// Wall holding `bricks` in order.
    pub fn new(bricks: Vec<Brick>) -> Self {
        let styles = vec![None; bricks.len()];
        Self {
            bricks,
            styles,
            container_style: None,
        }
    }

    /// Wall of bricks built from measured sizes.
    pub fn from_sizes(sizes: impl IntoIterator<Item = Size>) -> Self {
        Self::new(sizes.into_iter().map(Brick::new).collect())
    }

    /// Append a brick after the existing ones.
    pub fn push(&mut self, brick: Brick) {
        self.bricks.push(brick);
        self.styles.push(None);
    }

    /// Number of bricks.
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Whether the wall holds no bricks.
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Brick at `index`.
    pub fn brick(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// Brick at `index`, mutably.
    pub fn brick_mut(&mut self, index: usize) -> Option<&mut Brick> {
        self.bricks.get_mut(index)
    }

    /// Last style applied to the brick at `index`.
    pub fn style(&self, index: usize) -> Option<&BrickStyle> {
        self.styles.get(index).and_then(Option::as_ref)
    }

    /// Last style applied to the container.
    pub fn container_style(&self) -> Option<&ContainerStyle> {
        self.container_style.as_ref()
    }
}

impl Container for Wall {
    fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    fn apply_brick_style(&mut self, index: usize, style: &BrickStyle) {
        if let Some(slot) = self.styles.get_mut(index) {
            *slot = Some(style.clone());
        }
    }

    fn apply_container_style(&mut self, style: &ContainerStyle) {
        self.container_style = Some(*style);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/host.rs"]
mod tests;
