//! Test helpers for writing request and catalog files.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory holding the files for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Request JSON for a south-facing balcony in mild weather.
pub(super) fn request_json(length: f64, width: f64) -> Value {
    json!({
        "space": {
            "length": length,
            "width": width,
            "railingHeight": 1.1,
            "orientation": "south",
            "peakSunHours": 6.0,
            "floorMaterial": "tile",
        },
        "environment": { "temperature": 22.0, "humidity": 55.0 },
    })
}

pub(super) fn write_json_file(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise test JSON");
    write_utf8(path, &payload);
}

/// Decode captured stdout as a JSON array.
pub(super) fn output_entries(stdout: &[u8]) -> Vec<Value> {
    let text = std::str::from_utf8(stdout).expect("stdout utf-8");
    serde_json::from_str(text).expect("output should be a JSON array")
}
