//! Filesystem helpers for reading amenity and target documents.
//!
//! Built on `cap-std` and `camino` so every path the CLI touches is UTF-8
//! and every open goes through an explicit ambient authority.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path for reading using ambient authority.
///
/// # Errors
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when the path or its parent is
/// missing, and other IO errors as they arise.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::io::Read;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn reads_back_written_file(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let path = root.join("amenities.json");
        std::fs::write(&path, b"[]").expect("write amenities");

        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open amenities")
            .read_to_string(&mut contents)
            .expect("read amenities");
        assert_eq!(contents, "[]");
    }

    #[rstest]
    fn distinguishes_files_from_directories(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let file = root.join("targets.json");
        std::fs::write(&file, b"{}").expect("write targets");
        let dir = root.join("nested");
        std::fs::create_dir(&dir).expect("create dir");

        assert!(file_is_file(&file).expect("inspect file"));
        assert!(!file_is_file(&dir).expect("inspect dir"));
    }

    #[rstest]
    fn missing_file_reports_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_tmp, root) = workspace;
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn bare_names_resolve_against_current_dir() {
        let (_dir, name) = open_dir_and_file(Utf8Path::new("Cargo.toml")).expect("open cwd");
        assert_eq!(name, "Cargo.toml");
    }
}
