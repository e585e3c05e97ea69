use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// One raw enumeration record, as reported by the filesystem collaborator.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}
