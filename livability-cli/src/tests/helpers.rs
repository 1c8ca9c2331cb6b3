//! Test helpers for laying out amenity and target documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::score::ScoreArgs;

pub(super) const CENTER_LAT: f64 = 40.7128;
pub(super) const CENTER_LNG: f64 = -74.006;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory holding the documents for one CLI run.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    /// Score arguments pointing at `amenities` around the default centre.
    pub(super) fn args(&self, amenities: &Utf8Path) -> ScoreArgs {
        ScoreArgs {
            amenities_path: Some(amenities.to_path_buf()),
            lat: Some(CENTER_LAT),
            lng: Some(CENTER_LNG),
            ..ScoreArgs::default()
        }
    }
}

/// Two groceries and a restaurant a few hundred metres from the centre,
/// plus a park well outside every radius.
pub(super) const NEIGHBOURHOOD: &str = r#"[
    {"id": 1, "lat": 40.7148, "lng": -74.006, "name": "Corner Market", "category": "grocery"},
    {"id": "2", "lat": 40.7158, "lng": -74.006, "name": "Fresh Foods", "type": "supermarket", "category": "grocery"},
    {"id": 3, "lat": 40.7118, "lng": -74.006, "name": "Diner", "category": "restaurant"},
    {"id": 4, "lat": 41.2, "lng": -74.006, "name": "Far Park", "category": "park"}
]"#;
