use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use tempfile::TempDir;

use crate::core::{build, locate};
use crate::fs::RealFileSystem;
use crate::models::EntryNode;

/// The `-t` self check: generate a known fixture tree in a temporary
/// directory and verify building, counting, and lookup against it.
pub async fn run() -> Result<String> {
    let temp = TempDir::new().context("create fixture directory")?;
    let root = temp.path().join("website");
    create_fixture(&root)?;

    let fs = RealFileSystem;
    let tree = build(&fs, &root, false).await?;

    ensure!(tree.name == "website", "root name is {:?}", tree.name);
    ensure!(tree.path == root, "root path is {:?}", tree.path);
    ensure!(
        tree.directory_count == 3,
        "expected 3 directories, counted {}",
        tree.directory_count
    );
    ensure!(
        tree.file_count == 5,
        "expected 5 files, counted {}",
        tree.file_count
    );

    let again = build(&fs, &root, false).await?;
    ensure!(tree == again, "two builds of the same path differ");

    let dirs_only = build(&fs, &root, true).await?;
    ensure!(
        dirs_only.directory_count == 3 && dirs_only.file_count == 0,
        "directories-only build counted {} directories, {} files",
        dirs_only.directory_count,
        dirs_only.file_count
    );

    let tree = EntryNode::Directory(tree);

    let hit = locate(&tree, "png");
    ensure!(hit.name() == "png", "lookup of png found {:?}", hit.name());
    ensure!(
        hit.path() == root.join("imgs").join("png"),
        "lookup of png found path {:?}",
        hit.path()
    );

    let deep = locate(&tree, "c.png");
    ensure!(
        deep.path() == root.join("imgs").join("png").join("c.png"),
        "deep lookup found path {:?}",
        deep.path()
    );

    let miss = locate(&tree, "ERROR");
    ensure!(
        miss.is_not_found() && miss.name() == "." && miss.path() == Path::new("."),
        "missed lookup did not return the sentinel"
    );
    ensure!(
        locate(&tree, ".secret").is_not_found(),
        "dot entries must stay invisible to lookup"
    );

    ensure!(
        build(&fs, &root.join("missing"), false).await.is_err(),
        "building a nonexistent path must fail"
    );

    Ok("self test passed\n".to_owned())
}

/// website/
///   imgs/ png/ {a,b,c}.png
///   docs/
///   index.html, style.css
///   .git/ (hidden), .secret (hidden)
fn create_fixture(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("imgs").join("png")).context("create fixture dirs")?;
    fs::create_dir(root.join("docs")).context("create fixture dirs")?;
    fs::create_dir(root.join(".git")).context("create fixture dirs")?;

    for name in ["a.png", "b.png", "c.png"] {
        fs::write(root.join("imgs").join("png").join(name), "png").context("write fixture")?;
    }
    fs::write(root.join("index.html"), "<html></html>").context("write fixture")?;
    fs::write(root.join("style.css"), "body {}").context("write fixture")?;
    fs::write(root.join(".secret"), "hidden").context("write fixture")?;
    fs::write(root.join(".git").join("HEAD"), "ref:").context("write fixture")?;

    Ok(())
}
