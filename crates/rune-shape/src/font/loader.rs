use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use rune_config::FaceConfig;

use crate::error::Result;
use crate::font::FontFace;

/// Key for identifying a font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Font index within the file (for collections).
    pub index: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, index: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index,
        }
    }
}

/// In-memory font cache keyed by file path and index.
///
/// Hands out shared faces so that several layouts can use the same font
/// list without reloading or copying font data.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<FontFace>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Get a font face from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: u32) -> Result<Arc<FontFace>> {
        let key = FontKey::new(&path, index);
        if let Some(face) = self.fonts.get(&key) {
            return Ok(face.clone());
        }

        let face = Arc::new(FontFace::from_path(&key.path, index)?);
        tracing::debug!(path = %key.path.display(), index, "loaded font face");
        self.fonts.insert(key, face.clone());
        Ok(face)
    }

    /// Load a configured font list, preserving its order.
    pub fn load_faces(&mut self, faces: &[FaceConfig]) -> Result<Vec<Arc<FontFace>>> {
        faces
            .iter()
            .map(|face| self.get_or_load(&face.path, face.index))
            .collect()
    }

    /// Insert an already constructed font face with an explicit key.
    pub fn insert(&mut self, key: FontKey, face: Arc<FontFace>) {
        self.fonts.insert(key, face);
    }

    /// Retrieve a font by key if it exists.
    pub fn get(&self, key: &FontKey) -> Option<Arc<FontFace>> {
        self.fonts.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
