use crate::{
    config::model::{BreakpointDescriptor, PackerConfig},
    foundation::{core::Size, error::BrickResult},
    layout::{
        breakpoint::{ActiveBreakpoint, Breakpoints, FixedViewport, Viewport},
        brick::Brick,
        columns::ColumnHeights,
        placement::{PlacedBrick, place_bricks},
        sizer::container_size,
    },
    pack::{
        events::{EventKind, LayoutEvent, ListenerId, Listeners},
        host::{Container, Wall},
        schedule::{FrameScheduler, ManualScheduler},
        style::{BrickStyle, ContainerStyle, Offset},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Which kind of pass produced a report.
pub enum PackMode {
    /// Breakpoint re-resolved, columns reset, every brick placed.
    Full,
    /// Only unpacked bricks placed, on top of the existing columns.
    Incremental,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Outcome of one layout pass.
pub struct PackReport {
    /// Pass kind.
    pub mode: PackMode,
    /// Descriptor in effect during the pass.
    pub breakpoint: BreakpointDescriptor,
    /// Placements made by this pass, in source order.
    pub placements: Vec<PlacedBrick>,
    /// Container extent; `None` when the pass placed nothing.
    pub container: Option<Size>,
    /// Column heights after the pass.
    pub column_heights: Vec<f64>,
}

/// Masonry layout driver for one container.
///
/// Owns the layout state (active breakpoint and column heights) and
/// sequences full packs, incremental updates and debounced resize checks.
/// All work runs synchronously on the caller's thread; calls must not
/// overlap.
pub struct Packer<C, V = FixedViewport, S = ManualScheduler> {
    config: PackerConfig,
    breakpoints: Breakpoints,
    active: ActiveBreakpoint,
    heights: ColumnHeights,
    container: C,
    viewport: V,
    scheduler: S,
    listeners: Listeners,
    observing: bool,
    ticking: bool,
}

impl<C, V, S> std::fmt::Debug for Packer<C, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Packer")
            .field("active", &self.active)
            .field("heights", &self.heights)
            .field("observing", &self.observing)
            .field("ticking", &self.ticking)
            .finish_non_exhaustive()
    }
}

impl Packer<Wall, FixedViewport, ManualScheduler> {
    /// Packer over an in-memory [`Wall`] with a fixed-width viewport.
    pub fn headless(config: PackerConfig, bricks: Vec<Brick>, width: f64) -> BrickResult<Self> {
        Self::new(
            config,
            Wall::new(bricks),
            FixedViewport::new(width),
            ManualScheduler::new(),
        )
    }
}

impl<C: Container, V: Viewport, S: FrameScheduler> Packer<C, V, S> {
    /// Validate `config` and bind it to its collaborators.
    ///
    /// The breakpoint is resolved immediately so an `update` before the first
    /// `pack` stacks onto empty columns.
    pub fn new(
        mut config: PackerConfig,
        container: C,
        viewport: V,
        scheduler: S,
    ) -> BrickResult<Self> {
        config.normalize();
        let breakpoints = Breakpoints::from_config(&config)?;
        let active = breakpoints.resolve(&viewport);
        let heights = ColumnHeights::new(active.descriptor.column_count());
        Ok(Self {
            config,
            breakpoints,
            active,
            heights,
            container,
            viewport,
            scheduler,
            listeners: Listeners::default(),
            observing: false,
            ticking: false,
        })
    }

    #[tracing::instrument(skip(self))]
    /// Full pass: re-resolve the breakpoint, reset columns, place every brick.
    pub fn pack(&mut self) -> PackReport {
        self.active = self.breakpoints.resolve(&self.viewport);
        self.heights.reset(self.active.descriptor.column_count());

        let pending: Vec<usize> = (0..self.container.bricks().len()).collect();
        let report = self.run(PackMode::Full, &pending);
        self.listeners.emit(&LayoutEvent::Pack);
        report
    }

    #[tracing::instrument(skip(self))]
    /// Incremental pass: place only unpacked bricks on top of the current columns.
    pub fn update(&mut self) -> PackReport {
        let pending = self.container.unpacked();
        let report = self.run(PackMode::Incremental, &pending);
        self.listeners.emit(&LayoutEvent::Update);
        report
    }

    /// Start or stop reacting to [`Packer::notify_resize`].
    pub fn resize(&mut self, enable: bool) -> &mut Self {
        self.observing = enable;
        self
    }

    /// Host signal that the viewport was resized.
    ///
    /// Schedules at most one frame until [`Packer::run_frame`] runs; ignored
    /// while resize observation is off.
    pub fn notify_resize(&mut self) {
        if self.observing && !self.ticking {
            self.scheduler.request_frame();
            self.ticking = true;
        }
    }

    #[tracing::instrument(skip(self))]
    /// Debounced resize check, run by the host on the requested frame.
    ///
    /// Repacks and emits [`LayoutEvent::Resize`] when the viewport now
    /// resolves to a different breakpoint; otherwise does nothing.
    pub fn run_frame(&mut self) -> Option<PackReport> {
        let index = self.breakpoints.resolve_index(&self.viewport);
        let report = if index != self.active.index {
            tracing::debug!(from = self.active.index, to = index, "breakpoint changed");
            let report = self.pack();
            self.listeners.emit(&LayoutEvent::Resize(self.active.descriptor));
            Some(report)
        } else {
            None
        };
        self.ticking = false;
        report
    }

    /// Subscribe to every `kind` notification.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&LayoutEvent) + 'static,
    ) -> ListenerId {
        self.listeners.on(kind, listener)
    }

    /// Subscribe to the next `kind` notification only.
    pub fn once(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&LayoutEvent) + 'static,
    ) -> ListenerId {
        self.listeners.once(kind, listener)
    }

    /// Unsubscribe a listener.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.off(id)
    }

    /// Normalized configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Breakpoint in effect.
    pub fn active_breakpoint(&self) -> ActiveBreakpoint {
        self.active
    }

    /// Current column heights.
    pub fn column_heights(&self) -> &ColumnHeights {
        &self.heights
    }

    /// The container.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// The container, mutably (to add bricks or record new measurements).
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// The viewport.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// The viewport, mutably.
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The frame scheduler, mutably.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether resize signals are being observed.
    pub fn is_observing_resize(&self) -> bool {
        self.observing
    }

    /// Whether a resize frame has been requested and not yet run.
    pub fn is_tick_pending(&self) -> bool {
        self.ticking
    }

    /// Give back the container.
    pub fn into_container(self) -> C {
        self.container
    }

    fn run(&mut self, mode: PackMode, pending: &[usize]) -> PackReport {
        let breakpoint = self.active.descriptor;
        let placements = place_bricks(
            self.container.bricks_mut(),
            pending,
            &mut self.heights,
            &breakpoint,
        );

        for placed in &placements {
            let style = BrickStyle {
                offset: Offset::for_placement(&placed.placement, self.config.position),
                span: placed.placement.span,
                packed_attribute: self.config.packed.clone(),
            };
            self.container.apply_brick_style(placed.index, &style);
        }

        let container = placements.last().map(|last| {
            let width = self
                .container
                .bricks()
                .get(last.index)
                .map_or(0.0, |b| b.size().width);
            container_size(&breakpoint, width, &self.heights)
        });
        if let Some(size) = container {
            self.container.apply_container_style(&ContainerStyle { size });
        }

        tracing::debug!(
            ?mode,
            columns = breakpoint.columns,
            placed = placements.len(),
            "layout pass finished"
        );

        PackReport {
            mode,
            breakpoint,
            placements,
            container,
            column_heights: self.heights.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/packer.rs"]
mod tests;
