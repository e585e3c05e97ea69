mod build;
mod locate;
mod render;

pub use build::{BuildError, build};
pub use locate::locate;
pub use render::{render, render_at};
