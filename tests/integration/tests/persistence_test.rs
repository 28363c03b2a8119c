//! Last-used-directory persistence behavior

use anyhow::Result;
use frameview::source::OpenCvFrameSource;
use frameview::utils::LastDirStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn remembered_directory_comes_from_loaded_video() -> Result<()> {
    let tmp = TempDir::new()?;
    let store = LastDirStore::at(tmp.path().join("last_dir.txt"));

    store.store_parent_of(Path::new("/videos/holiday/clip.mp4"));
    assert_eq!(store.read(), Some(PathBuf::from("/videos/holiday")));
    Ok(())
}

#[test]
fn failed_open_leaves_remembered_directory_unchanged() -> Result<()> {
    let tmp = TempDir::new()?;
    let store = LastDirStore::at(tmp.path().join("last_dir.txt"));
    store.store(Path::new("/videos/holiday"))?;

    // The directory is only rewritten after a successful load.
    assert!(OpenCvFrameSource::open(Path::new("/no/such/video.mp4")).is_err());
    assert_eq!(store.read(), Some(PathBuf::from("/videos/holiday")));
    Ok(())
}
