//! File-system resource helpers.
use anyhow::{Context as _, Result};
use std::fs::{self, FileTimes};
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Remove whatever exists at `path`, including broken symlinks.
///
/// A real directory is removed recursively.  Anything else (file, symlink,
/// junction) is removed as a single entry, so a link to a directory never
/// takes the directory's contents with it.  Does nothing if `path` is absent.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<()> {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return Ok(());
    };
    if meta.file_type().is_symlink() {
        remove_link(path, &meta)
    } else if meta.is_dir() {
        fs::remove_dir_all(path).with_context(|| format!("remove directory: {}", path.display()))
    } else {
        fs::remove_file(path).with_context(|| format!("remove file: {}", path.display()))
    }
}

/// Remove a symlink without following it.
///
/// On Windows, directory symlinks must be removed with `remove_dir`; the raw
/// `FILE_ATTRIBUTE_DIRECTORY` bit tells them apart from file symlinks.
fn remove_link(path: &Path, meta: &fs::Metadata) -> Result<()> {
    if is_dir_like(meta) {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
    .with_context(|| format!("remove link: {}", path.display()))
}

#[cfg(windows)]
fn is_dir_like(meta: &fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
}

#[cfg(not(windows))]
const fn is_dir_like(_meta: &fs::Metadata) -> bool {
    false
}

/// Copy a regular file, keeping its permissions and access/modification times.
///
/// Times are carried over on a best-effort basis: a copy of a read-only file
/// cannot be reopened for writing, and keeps the copy time instead.
///
/// # Errors
///
/// Returns an error if the file cannot be copied.
pub fn copy_file_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
    let meta = fs::metadata(src).with_context(|| format!("reading metadata: {}", src.display()))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(file) = fs::OpenOptions::new().write(true).open(dst) {
        file.set_times(times).ok();
    }
    Ok(())
}

/// Recursively copy a directory tree.
///
/// Symlinks within the source tree are *followed*: directory symlinks are
/// recursed into and their contents materialised rather than copying the
/// link itself.
///
/// # Errors
///
/// Returns an error if the destination directory cannot be created, a source
/// entry cannot be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("creating directory {}", dst.display()))?;
    for entry in fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))? {
        let entry = entry.with_context(|| format!("reading entry in {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            copy_file_with_metadata(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn copies_files_and_subdirectories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        fs::write(src.path().join("a.txt"), b"aaa").unwrap();
        fs::create_dir(src.path().join("sub")).unwrap();
        fs::write(src.path().join("sub/b.txt"), b"bbb").unwrap();

        let target = dst.path().join("out");
        copy_dir_recursive(src.path(), &target).unwrap();

        assert_eq!(fs::read(target.join("a.txt")).unwrap(), b"aaa");
        assert_eq!(fs::read(target.join("sub/b.txt")).unwrap(), b"bbb");
    }

    #[test]
    fn copy_file_keeps_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::write(&src, "content").unwrap();
        let old = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        fs::OpenOptions::new()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(old)
            .unwrap();

        copy_file_with_metadata(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "content");
        assert_eq!(fs::metadata(&dst).unwrap().modified().unwrap(), old);
    }

    // -----------------------------------------------------------------------
    // ensure_parent_dir
    // -----------------------------------------------------------------------

    #[test]
    fn ensure_parent_dir_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("file.txt");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").exists());
    }

    #[test]
    fn ensure_parent_dir_noop_when_parent_exists() {
        let dir = tempfile::tempdir().unwrap();
        ensure_parent_dir(&dir.path().join("file.txt")).unwrap();
        assert!(dir.path().exists());
    }

    // -----------------------------------------------------------------------
    // remove_existing
    // -----------------------------------------------------------------------

    #[test]
    fn remove_existing_removes_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("target");
        fs::write(&file, "content").unwrap();
        remove_existing(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn remove_existing_removes_directory_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir_all(target.join("nested")).unwrap();
        fs::write(target.join("nested/file"), "x").unwrap();
        remove_existing(&target).unwrap();
        assert!(target.symlink_metadata().is_err());
    }

    #[test]
    fn remove_existing_noop_when_path_absent() {
        let dir = tempfile::tempdir().unwrap();
        remove_existing(&dir.path().join("nonexistent")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn remove_existing_removes_broken_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("/nonexistent/target", &link).unwrap();
        remove_existing(&link).unwrap();
        assert!(link.symlink_metadata().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn remove_existing_keeps_contents_behind_directory_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        let link = dir.path().join("link");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("keep.txt"), "keep").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        remove_existing(&link).unwrap();

        assert!(link.symlink_metadata().is_err());
        assert_eq!(fs::read_to_string(real.join("keep.txt")).unwrap(), "keep");
    }
}
