use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading assets. Fatal for sprites at startup,
/// best-effort for sounds at trigger time.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("sprite {0:?} is not in the asset manifest")]
    UnknownSprite(String),
}

/// Where asset bytes come from. The asset root is injected by whoever builds
/// the source; nothing here depends on the process location.
pub trait AssetSource {
    /// Read the asset at `path` (relative to the source root).
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Assets read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssets {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let full = self.root.join(path);
        std::fs::read(&full).map_err(|source| AssetError::Io {
            path: full.display().to_string(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// In-memory assets, for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }
}

impl AssetSource for MemoryAssets {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        self.files.get(path).cloned().ok_or_else(|| AssetError::Io {
            path: path.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not in memory asset set"),
        })
    }

    fn describe(&self) -> String {
        format!("memory ({} files)", self.files.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_assets_return_inserted_bytes() {
        let assets = MemoryAssets::new().with_file("car.png", vec![1u8, 2, 3]);
        assert_eq!(assets.read("car.png").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn memory_assets_report_missing_as_io_error() {
        let assets = MemoryAssets::new();
        match assets.read("horn.wav") {
            Err(AssetError::Io { path, source }) => {
                assert_eq!(path, "horn.wav");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn dir_assets_join_paths_under_root() {
        let root = std::env::temp_dir().join(format!("rc-engine-assets-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("icon.png"), b"png").unwrap();

        let assets = DirAssets::new(&root);
        assert_eq!(assets.read("icon.png").unwrap(), b"png".to_vec());
        assert!(assets.read("nope.png").is_err());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
