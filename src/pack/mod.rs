pub mod events;
pub mod host;
pub mod packer;
pub mod schedule;
pub mod style;
