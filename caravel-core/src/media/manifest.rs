//! src/media/manifest.rs
//! ============================================================================
//! # GalleryManifest: declarative gallery description
//!
//! A `gallery.toml` at the media root declares galleries and per-slide
//! caption metadata: a slide may carry an explicit `caption`, an `alt` text
//! and an accessible `label`; the first present value wins when captioning.
//!
//! ```toml
//! title = "LOCOMOTION"
//!
//! [[gallery]]
//! name = "spiral"
//!
//! [[gallery.slide]]
//! path = "spiral/overview.png"
//! caption = "Spiral engine overview"
//!
//! [[gallery.slide]]
//! path = "spiral/demo.mp4"
//! alt = "Spiral demo run"
//! duration = "12s"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::AppError;

/// File name looked up at the media root.
pub const MANIFEST_FILE: &str = "gallery.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryManifest {
    /// Optional banner title override.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, rename = "gallery")]
    pub galleries: Vec<GalleryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryEntry {
    pub name: String,

    #[serde(default, rename = "slide")]
    pub slides: Vec<SlideEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideEntry {
    /// Path relative to the media root.
    pub path: PathBuf,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub alt: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    /// Declared video duration; ignored for images.
    #[serde(default, with = "humantime_serde::option")]
    pub duration: Option<Duration>,
}

impl GalleryManifest {
    /// Loads `gallery.toml` from `root` if present. `Ok(None)` when the file
    /// does not exist, so callers can fall back to a directory scan.
    pub async fn load(root: &Path) -> Result<Option<Self>, AppError> {
        let path = root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        info!("Loading gallery manifest from {}", path.display());
        let text = TokioFs::read_to_string(&path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.clone(),
                source,
            })?;

        let manifest: Self =
            toml::from_str(&text).map_err(|e| AppError::manifest(&path, e.to_string()))?;

        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let text = r#"
            title = "LOCOMOTION"

            [[gallery]]
            name = "spiral"

            [[gallery.slide]]
            path = "spiral/overview.png"
            caption = "Spiral engine overview"

            [[gallery.slide]]
            path = "spiral/demo.mp4"
            alt = "Spiral demo run"
            duration = "12s"

            [[gallery]]
            name = "push-box"
        "#;

        let manifest: GalleryManifest = toml::from_str(text).expect("parse");
        assert_eq!(manifest.title.as_deref(), Some("LOCOMOTION"));
        assert_eq!(manifest.galleries.len(), 2);

        let spiral = &manifest.galleries[0];
        assert_eq!(spiral.name, "spiral");
        assert_eq!(spiral.slides.len(), 2);
        assert_eq!(spiral.slides[0].caption.as_deref(), Some("Spiral engine overview"));
        assert_eq!(spiral.slides[1].duration, Some(Duration::from_secs(12)));

        // a gallery with no slides is legal (it becomes inert)
        assert!(manifest.galleries[1].slides.is_empty());
    }

    #[test]
    fn slide_metadata_fields_are_all_optional() {
        let text = r#"
            [[gallery]]
            name = "bare"

            [[gallery.slide]]
            path = "bare/shot.png"
        "#;
        let manifest: GalleryManifest = toml::from_str(text).expect("parse");
        let slide = &manifest.galleries[0].slides[0];
        assert!(slide.caption.is_none());
        assert!(slide.alt.is_none());
        assert!(slide.label.is_none());
        assert!(slide.duration.is_none());
    }

    #[tokio::test]
    async fn load_returns_none_without_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = GalleryManifest::load(dir.path()).await.expect("load");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(MANIFEST_FILE), "not = [valid").expect("write");

        let err = GalleryManifest::load(dir.path()).await.unwrap_err();
        assert!(matches!(err, AppError::Manifest { .. }));
    }
}
