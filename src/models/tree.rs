use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Fixed sentinel path and name reported by a failed lookup.
const SENTINEL: &str = ".";

/// The one value `locate` hands out on a miss. A real node: it renders (a
/// fixed diagnostic line) and searches (always missing), so callers can
/// chain operations on a failed lookup without a null check.
pub static NOT_FOUND: EntryNode = EntryNode::NotFound;

/// Composite tree node: a file leaf, a directory with owned children, or
/// the not-found sentinel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EntryNode {
    File(FileEntry),
    Directory(DirectoryEntry),
    NotFound,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub only_directories: bool,
    /// Subdirectories anywhere beneath this node, itself excluded.
    pub directory_count: usize,
    /// Files anywhere beneath this node; always 0 when `only_directories`.
    pub file_count: usize,
    /// Enumeration order, never reordered.
    pub children: Vec<EntryNode>,
}

impl EntryNode {
    pub fn name(&self) -> &str {
        match self {
            EntryNode::File(file) => &file.name,
            EntryNode::Directory(dir) => &dir.name,
            EntryNode::NotFound => SENTINEL,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            EntryNode::File(file) => &file.path,
            EntryNode::Directory(dir) => &dir.path,
            EntryNode::NotFound => Path::new(SENTINEL),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EntryNode::NotFound)
    }
}

impl FileEntry {
    pub fn new(path: &Path) -> Self {
        let path = trim_trailing_separator(path);
        let name = entry_name(&path);
        Self { path, name }
    }
}

impl DirectoryEntry {
    pub fn new(path: &Path, only_directories: bool) -> Self {
        let path = trim_trailing_separator(path);
        let name = entry_name(&path);
        Self {
            path,
            name,
            only_directories,
            directory_count: 0,
            file_count: 0,
            children: Vec::new(),
        }
    }
}

fn trim_trailing_separator(path: &Path) -> PathBuf {
    let raw = path.as_os_str().to_string_lossy();
    let trimmed = raw.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() {
        // the filesystem root is all separators
        PathBuf::from(MAIN_SEPARATOR.to_string())
    } else {
        PathBuf::from(trimmed)
    }
}

/// Final path segment, or the whole path when there is none (`.`, `..`).
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}
