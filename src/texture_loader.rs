use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use crate::error::AssetError;

// --- Read EXIF orientation, 1 (normal) when absent or unreadable ---
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(orientation) = values.first() {
                        return *orientation;
                    }
                }
            }
            1
        }
        Err(e) => {
            log::debug!("No usable EXIF data: {}", e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path).map_err(|source| AssetError::Read {
        path: image_path.to_path_buf(),
        source,
    })?;

    // EXIF only works reliably for JPEG
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| AssetError::Decode { path: image_path.to_path_buf(), message: e.to_string() })?;

    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Upload { path: image_path.to_path_buf(), message: e.to_string() })?;

    // Free the CPU copy
    drop(image);

    Ok(texture)
}

/// Loads `name` from `assets_dir`; a failure is logged and yields `None` so the
/// caller can draw a placeholder.
pub fn load_asset(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    name: &str,
) -> Option<Texture2D> {
    let path = assets_dir.join(name);
    match load_texture_with_exif_rotation(rl, thread, &path) {
        Ok(texture) => {
            log::debug!("Loaded {:?} ({}x{})", path, texture.width(), texture.height());
            Some(texture)
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_defaults_without_exif() {
        assert_eq!(exif_orientation(b"not an image"), 1);
        assert_eq!(exif_orientation(&[]), 1);
    }
}
