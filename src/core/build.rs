use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::fs::FileSystem;
use crate::models::{DirectoryEntry, EntryKind, EntryNode, FileEntry};

#[derive(Debug, Error)]
pub enum BuildError {
    /// The requested root does not exist or is not a directory.
    #[error("error opening a dir: {}", path.display())]
    BadPath { path: PathBuf },
}

/// Build the composite tree rooted at `path`.
///
/// Children keep the collaborator's enumeration order. Entries whose name
/// starts with `.` are never materialized. With `only_directories`, file
/// leaves are neither materialized nor counted.
pub async fn build<F: FileSystem>(
    fs: &F,
    path: &Path,
    only_directories: bool,
) -> Result<DirectoryEntry, BuildError> {
    if !fs.is_dir(path).await {
        return Err(BuildError::BadPath {
            path: path.to_path_buf(),
        });
    }

    Ok(build_dir(fs, path, only_directories).await)
}

/// Recursive step over an already-verified directory. Infallible: a failed
/// enumeration leaves the node as an empty directory with zero counts.
async fn build_dir<F: FileSystem>(
    fs: &F,
    path: &Path,
    only_directories: bool,
) -> DirectoryEntry {
    let mut dir = DirectoryEntry::new(path, only_directories);

    let Ok(entries) = fs.read_dir(path).await else {
        return dir;
    };

    for entry in entries {
        if entry.name.starts_with('.') {
            continue;
        }

        match entry.kind {
            EntryKind::Directory => {
                let child = Box::pin(build_dir(fs, &entry.path, only_directories)).await;
                dir.directory_count += 1 + child.directory_count;
                dir.file_count += child.file_count;
                dir.children.push(EntryNode::Directory(child));
            }
            // symlinks and special files are leaves, like regular files
            _ if only_directories => {}
            _ => {
                dir.file_count += 1;
                dir.children
                    .push(EntryNode::File(FileEntry::new(&entry.path)));
            }
        }
    }

    dir
}
