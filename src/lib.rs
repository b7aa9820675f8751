//! Brickwork computes masonry (column-packed) layouts.
//!
//! Each brick in a container is assigned to the currently shortest column,
//! given a top/left offset, and may span several columns. The column count
//! and gutter follow responsive breakpoints that are re-evaluated when the
//! viewport crosses a threshold.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: viewport + breakpoints -> active [`BreakpointDescriptor`]
//! 2. **Reset**: column heights zeroed for the active column count (full packs only)
//! 3. **Place**: bricks in source order -> [`Placement`]s, column heights raised in place
//! 4. **Size**: final column heights -> container extent
//!
//! [`Packer`] sequences these as a full `pack`, an incremental `update`
//! (new bricks only, stacked on the existing columns) or a debounced
//! resize check. DOM-like concerns are collaborators behind traits:
//! [`Container`] (bricks and style output), [`Viewport`] (width queries)
//! and [`FrameScheduler`] (frame callbacks).
//!
//! # Getting started
//!
//! ```
//! use brickwork::{Brick, Packer, PackerConfigBuilder, Size};
//!
//! let config = PackerConfigBuilder::new()
//!     .base(1, 10.0)
//!     .at(768.0, 3, 10.0)
//!     .build()
//!     .unwrap();
//! let bricks = vec![Brick::new(Size::new(100.0, 50.0)); 4];
//! let mut packer = Packer::headless(config, bricks, 1024.0).unwrap();
//!
//! let report = packer.pack();
//! assert_eq!(report.column_heights, vec![120.0, 60.0, 60.0]);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod layout;
mod pack;

pub use config::dsl::PackerConfigBuilder;
pub use config::model::{BreakpointDescriptor, DATA_PREFIX, PackerConfig, normalize_packed};
pub use config::scene::{BrickSpec, Scene};
pub use foundation::core::{Size, Vec2, clamp_length, clamp_size, px};
pub use foundation::error::{BrickError, BrickResult};
pub use layout::breakpoint::{ActiveBreakpoint, Breakpoints, FixedViewport, Viewport};
pub use layout::brick::Brick;
pub use layout::columns::{ColumnHeights, Occupant};
pub use layout::placement::{PlacedBrick, Placement, left_offset, per_column_width, place_bricks};
pub use layout::sizer::container_size;
pub use layout::span::{requested_span, resolve_span};
pub use pack::events::{EventKind, LayoutEvent, ListenerId, Listeners};
pub use pack::host::{Container, Wall};
pub use pack::packer::{PackMode, PackReport, Packer};
pub use pack::schedule::{FrameScheduler, ManualScheduler};
pub use pack::style::{BrickStyle, ContainerStyle, Offset, SPAN_ATTRIBUTE};
