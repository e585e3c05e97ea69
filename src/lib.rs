pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
pub mod selftest;

pub use crate::core::{BuildError, build, locate, render, render_at};
pub use crate::models::{DirectoryEntry, EntryNode, FileEntry, NOT_FOUND};
