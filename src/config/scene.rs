use crate::{
    config::model::PackerConfig,
    foundation::{core::Size, error::BrickResult},
    layout::brick::Brick,
    pack::packer::{PackReport, Packer},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A measured brick as written in a scene file.
pub struct BrickSpec {
    /// Measured width in pixels.
    pub width: f64,
    /// Measured height in pixels.
    pub height: f64,
    /// Declared span; missing means 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<u32>,
}

impl BrickSpec {
    /// The brick record this spec describes.
    pub fn to_brick(self) -> Brick {
        let mut brick = Brick::new(Size::new(self.width, self.height));
        brick.set_span(self.span);
        brick
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A headless layout scenario: configuration, viewport and measured bricks.
///
/// `bricks` are laid out with a full pack; `appended` bricks are then added
/// and laid out with an incremental update.
pub struct Scene {
    /// Packer configuration.
    pub config: PackerConfig,
    /// Viewport width in pixels.
    pub viewport_width: f64,
    /// Bricks present for the full pack.
    pub bricks: Vec<BrickSpec>,
    /// Bricks appended afterwards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appended: Vec<BrickSpec>,
}

impl Scene {
    /// Parse a scene from JSON; the configuration is normalized and validated.
    pub fn from_json_str(s: &str) -> BrickResult<Self> {
        let mut scene: Self = serde_json::from_str(s)?;
        scene.config.normalize();
        scene.config.validate()?;
        Ok(scene)
    }

    /// Run the scene: a full pack, then an update when bricks are appended.
    pub fn run(&self) -> BrickResult<Vec<PackReport>> {
        let bricks = self.bricks.iter().map(|b| b.to_brick()).collect();
        let mut packer =
            Packer::headless(self.config.clone(), bricks, self.viewport_width)?;

        let mut reports = vec![packer.pack()];
        if !self.appended.is_empty() {
            for spec in &self.appended {
                packer.container_mut().push(spec.to_brick());
            }
            reports.push(packer.update());
        }
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
