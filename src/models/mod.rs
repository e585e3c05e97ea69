mod entry;
mod tree;

pub use entry::{EntryKind, FsEntry};
pub use tree::{DirectoryEntry, EntryNode, FileEntry, NOT_FOUND};
