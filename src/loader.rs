use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use image_browser::{DecodedImage, PixelFormat};
use log::{debug, warn};
use raylib::consts::PixelFormat as RaylibPixelFormat;
use raylib::prelude::Image;

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && SUPPORTED_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        Err(e) => {
            debug!("No usable EXIF data: {}", e);
            1
        }
    }
}

// 1 = upright, 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
// Mirrored orientations (2, 4, 5, 7) are left as stored.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
}

/// Decodes one image file to RGBA, honouring JPEG EXIF orientation.
pub fn load_decoded_image(image_path: &Path) -> Result<DecodedImage> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode {}: {}", image_path.display(), e))?;
    apply_orientation(&mut image, orientation);
    image.set_format(RaylibPixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8);

    let pixels: Vec<u8> = image
        .get_image_data()
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, c.a])
        .collect();

    let decoded = DecodedImage::new(image.width() as u32, image.height() as u32, PixelFormat::Rgba, pixels)
        .with_context(|| format!("Decoded buffer of {} is inconsistent", image_path.display()))?;
    debug!(
        "Loaded {} ({}x{}, orientation {})",
        image_path.display(),
        decoded.width(),
        decoded.height(),
        orientation
    );
    Ok(decoded)
}

/// Loads every supported image in `dir_path`, skipping files that fail to decode.
pub fn load_images(dir_path: &Path) -> Result<Vec<DecodedImage>> {
    let mut images = Vec::new();
    for path in load_sorted_image_paths(dir_path)? {
        match load_decoded_image(&path) {
            Ok(image) => images.push(image),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    if images.is_empty() {
        bail!("No image in {} could be decoded", dir_path.display());
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).expect("failed to create test file");
        file.write_all(bytes).expect("failed to write test file");
        path
    }

    /// 2x1 24-bit BMP: left pixel red, right pixel blue.
    fn tiny_bmp() -> Vec<u8> {
        let mut bmp = Vec::new();
        bmp.extend_from_slice(b"BM");
        bmp.extend_from_slice(&62u32.to_le_bytes()); // file size
        bmp.extend_from_slice(&0u32.to_le_bytes()); // reserved
        bmp.extend_from_slice(&54u32.to_le_bytes()); // pixel data offset
        bmp.extend_from_slice(&40u32.to_le_bytes()); // DIB header size
        bmp.extend_from_slice(&2i32.to_le_bytes()); // width
        bmp.extend_from_slice(&1i32.to_le_bytes()); // height
        bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
        bmp.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
        bmp.extend_from_slice(&0u32.to_le_bytes()); // no compression
        bmp.extend_from_slice(&8u32.to_le_bytes()); // image size
        bmp.extend_from_slice(&2835i32.to_le_bytes());
        bmp.extend_from_slice(&2835i32.to_le_bytes());
        bmp.extend_from_slice(&0u32.to_le_bytes());
        bmp.extend_from_slice(&0u32.to_le_bytes());
        // BGR pixels, row padded to 4 bytes
        bmp.extend_from_slice(&[0, 0, 255, 255, 0, 0, 0, 0]);
        bmp
    }

    #[test]
    fn lists_supported_files_sorted_by_name() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "b.PNG", b"x");
        touch(dir.path(), "a.jpg", b"x");
        touch(dir.path(), "notes.txt", b"x");
        touch(dir.path(), "c.gif", b"x");
        fs::create_dir(dir.path().join("d.png")).expect("failed to create subdir");

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .expect("scan failed")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.gif"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "readme.md", b"x");
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No image files found"));
    }

    #[test]
    fn missing_exif_means_upright() {
        assert_eq!(exif_orientation(b"not a jpeg"), 1);
    }

    #[test]
    fn decodes_bmp_to_rgba() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = touch(dir.path(), "tiny.bmp", &tiny_bmp());

        let image = load_decoded_image(&path).expect("bmp should decode");
        assert_eq!((image.width(), image.height()), (2, 1));
        assert_eq!(image.format(), PixelFormat::Rgba);
        assert_eq!(image.pixels(), &[255, 0, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn undecodable_files_are_skipped() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.png", b"definitely not a png");
        touch(dir.path(), "b.bmp", &tiny_bmp());

        let images = load_images(dir.path()).expect("one image should load");
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn all_files_broken_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.png", b"garbage");
        assert!(load_images(dir.path()).is_err());
    }
}
