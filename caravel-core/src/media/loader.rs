//! src/media/loader.rs
//! ============================================================================
//! # Media discovery
//!
//! Builds the carousel list for a media root. A `gallery.toml` manifest wins
//! when present; otherwise each subdirectory of the root becomes one gallery
//! and its files are classified image/video by extension. Loose files at the
//! root form a final catch-all gallery.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::AppError;
use crate::media::manifest::{GalleryManifest, SlideEntry};
use crate::model::carousel::{Carousel, Slide};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "avi"];

/// Fallback when a manifest declares a video without a duration.
const DEFAULT_VIDEO_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MediaClass {
    Image,
    Video,
}

fn classify(path: &Path) -> Option<MediaClass> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaClass::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaClass::Video)
    } else {
        None
    }
}

/// Result of media discovery: carousels plus an optional banner title from
/// the manifest.
#[derive(Debug)]
pub struct LoadedMedia {
    pub carousels: Vec<Carousel>,
    pub title: Option<String>,
}

/// Loads galleries from `root`, preferring a manifest over a scan.
pub async fn load_galleries(root: &Path) -> Result<LoadedMedia, AppError> {
    if !root.is_dir() {
        return Err(AppError::InvalidMediaRoot(root.to_path_buf()));
    }

    if let Some(manifest) = GalleryManifest::load(root).await? {
        return Ok(from_manifest(root, manifest));
    }

    info!("No manifest at {}, scanning directories", root.display());
    Ok(LoadedMedia {
        carousels: scan_directories(root)?,
        title: None,
    })
}

fn from_manifest(root: &Path, manifest: GalleryManifest) -> LoadedMedia {
    let carousels = manifest
        .galleries
        .into_iter()
        .map(|gallery| {
            let slides = gallery
                .slides
                .into_iter()
                .filter_map(|entry| slide_from_entry(root, entry))
                .collect();
            Carousel::new(gallery.name, slides)
        })
        .collect();

    LoadedMedia {
        carousels,
        title: manifest.title,
    }
}

fn slide_from_entry(root: &Path, entry: SlideEntry) -> Option<Slide> {
    let path = root.join(&entry.path);
    if !path.exists() {
        warn!("Manifest slide missing on disk, skipping: {}", path.display());
        return None;
    }

    let mut slide = match classify(&path) {
        Some(MediaClass::Video) => {
            Slide::video(path, entry.duration.unwrap_or(DEFAULT_VIDEO_DURATION))
        }
        Some(MediaClass::Image) | None => Slide::image(path),
    };

    if let Some(caption) = entry.caption {
        slide = slide.with_caption(caption);
    }
    if let Some(alt) = entry.alt {
        slide = slide.with_alt(alt);
    }
    if let Some(label) = entry.label {
        slide = slide.with_label(label);
    }
    Some(slide)
}

/// Each immediate subdirectory becomes one gallery; loose media files at the
/// root form a final gallery named after the root directory.
fn scan_directories(root: &Path) -> Result<Vec<Carousel>, AppError> {
    let mut subdirs = Vec::new();
    let mut loose_files = Vec::new();

    let entries = std::fs::read_dir(root).map_err(|e| AppError::media_scan(root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::media_scan(root, e))?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if classify(&path).is_some() {
            loose_files.push(path);
        }
    }

    subdirs.sort();
    loose_files.sort();

    let mut carousels = Vec::with_capacity(subdirs.len() + 1);
    for dir in subdirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "gallery".to_string());
        carousels.push(Carousel::new(name, scan_gallery_dir(&dir)));
    }

    if !loose_files.is_empty() {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media".to_string());
        let slides = loose_files.into_iter().map(slide_from_path).collect();
        carousels.push(Carousel::new(name, slides));
    }

    Ok(carousels)
}

fn scan_gallery_dir(dir: &Path) -> Vec<Slide> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_file() && classify(e.path()).is_some() => {
                Some(e.into_path())
            }
            Ok(_) => None,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {e}", dir.display());
                None
            }
        })
        .collect();
    paths.sort();
    paths.into_iter().map(slide_from_path).collect()
}

fn slide_from_path(path: std::path::PathBuf) -> Slide {
    match classify(&path) {
        Some(MediaClass::Video) => Slide::video(path, DEFAULT_VIDEO_DURATION),
        _ => Slide::image(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("touch");
    }

    #[test]
    fn classify_by_extension_case_insensitive() {
        assert_eq!(classify(Path::new("a.PNG")), Some(MediaClass::Image));
        assert_eq!(classify(Path::new("b.mp4")), Some(MediaClass::Video));
        assert_eq!(classify(Path::new("c.txt")), None);
        assert_eq!(classify(Path::new("noext")), None);
    }

    #[tokio::test]
    async fn scan_builds_one_gallery_per_subdirectory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::create_dir(root.join("alpha")).unwrap();
        touch(&root.join("alpha/b.png"));
        touch(&root.join("alpha/a.png"));
        touch(&root.join("alpha/notes.txt"));
        fs::create_dir(root.join("beta")).unwrap();
        touch(&root.join("beta/clip.mp4"));

        let loaded = load_galleries(root).await.expect("load");
        assert!(loaded.title.is_none());
        assert_eq!(loaded.carousels.len(), 2);

        let alpha = &loaded.carousels[0];
        assert_eq!(alpha.name(), "alpha");
        assert_eq!(alpha.len(), 2); // notes.txt filtered out
        assert!(alpha.slides()[0].path.ends_with("a.png")); // sorted

        let beta = &loaded.carousels[1];
        assert!(beta.slides()[0].is_video());
        // scanned slides carry no caption metadata: caption row hidden
        assert!(beta.caption().is_none());
    }

    #[tokio::test]
    async fn loose_root_files_form_catch_all_gallery() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("solo.png"));

        let loaded = load_galleries(dir.path()).await.expect("load");
        assert_eq!(loaded.carousels.len(), 1);
        assert_eq!(loaded.carousels[0].len(), 1);
        assert!(!loaded.carousels[0].has_indicators());
    }

    #[tokio::test]
    async fn empty_subdirectory_yields_inert_carousel() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("empty")).unwrap();

        let loaded = load_galleries(dir.path()).await.expect("load");
        assert_eq!(loaded.carousels.len(), 1);
        assert!(loaded.carousels[0].is_inert());
    }

    #[tokio::test]
    async fn manifest_wins_over_scan() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        touch(&root.join("shot.png"));
        touch(&root.join("demo.mp4"));
        fs::write(
            root.join("gallery.toml"),
            r#"
                title = "LOCOMOTION"

                [[gallery]]
                name = "work"

                [[gallery.slide]]
                path = "shot.png"
                caption = "A shot"

                [[gallery.slide]]
                path = "demo.mp4"
                duration = "3s"

                [[gallery.slide]]
                path = "missing.png"
            "#,
        )
        .unwrap();

        let loaded = load_galleries(root).await.expect("load");
        assert_eq!(loaded.title.as_deref(), Some("LOCOMOTION"));
        assert_eq!(loaded.carousels.len(), 1);

        let work = &loaded.carousels[0];
        // missing.png skipped with a warning
        assert_eq!(work.len(), 2);
        assert_eq!(work.caption(), Some("A shot"));
        assert!(matches!(
            work.slides()[1].kind,
            crate::model::carousel::MediaKind::Video { duration } if duration == Duration::from_secs(3)
        ));
    }

    #[tokio::test]
    async fn missing_root_is_an_error() {
        let err = load_galleries(Path::new("/definitely/not/here"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidMediaRoot(_)));
    }
}
