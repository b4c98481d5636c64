use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

// --- Helper: Resolve a photo source relative to the deck file ---
pub fn resolve_image_path(deck_dir: &Path, source: &str) -> Option<PathBuf> {
    if source.contains("://") {
        // Remote images are not fetched; the slide keeps its plain background
        return None;
    }
    let path = Path::new(source);
    Some(if path.is_absolute() { path.to_path_buf() } else { deck_dir.join(path) })
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read image {}", image_path.display()))?;

    let mut orientation = 1; // Default: no rotation

    // EXIF is only read reliably from JPEG
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(value) = values.first() {
                            orientation = *value;
                        }
                    }
                }
            }
            Err(e) => {
                // Not fatal, the image is shown as stored
                warn!(path = %image_path.display(), "could not read EXIF data: {}", e);
            }
        }
    }

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("failed to decode image {}: {}", image_path.display(), e))?;

    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored here.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 180 deg rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 90 deg CW rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(path = %image_path.display(), "applied 90 deg CCW rotation");
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_paths_and_skips_urls() {
        let dir = Path::new("/decks/wrapped");
        assert_eq!(
            resolve_image_path(dir, "photos/night.jpg"),
            Some(PathBuf::from("/decks/wrapped/photos/night.jpg"))
        );
        assert_eq!(resolve_image_path(dir, "/tmp/a.png"), Some(PathBuf::from("/tmp/a.png")));
        assert_eq!(resolve_image_path(dir, "https://images.example.com/a.jpg"), None);
    }
}
