pub mod breakpoint;
pub mod brick;
pub mod columns;
pub mod placement;
pub mod sizer;
pub mod span;
