/// Cover image loading
///
/// Picked cover files are read off the UI thread and kept in memory as
/// encoded bytes. The image widget decodes them when a card is drawn.

use rfd::FileDialog;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::state::data::Cover;

/// Extensions offered by the cover picker
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Show the native file picker, restricted to image files
pub fn pick_cover() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Upload Book Cover")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
}

/// Read a cover file into an embedded cover
pub async fn read_cover(path: PathBuf) -> Result<Cover, CatalogError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| CatalogError::CoverRead {
            path: path.clone(),
            source,
        })?;

    let cover = encode_cover(bytes)?;
    tracing::debug!(path = %path.display(), "cover loaded");
    Ok(cover)
}

/// Validate encoded image bytes and wrap them as a cover
pub fn encode_cover(bytes: Vec<u8>) -> Result<Cover, CatalogError> {
    if bytes.is_empty() {
        return Err(CatalogError::EmptyCover);
    }

    let format = image::guess_format(&bytes).map_err(|_| CatalogError::UnsupportedCover)?;
    if !format.reading_enabled() {
        return Err(CatalogError::UnsupportedCover);
    }

    Ok(Cover::embedded(format.to_mime_type(), bytes))
}

/// Static cover shipped in the asset directory
pub fn asset_cover(asset_dir: &Path, name: &str) -> Cover {
    Cover::asset(asset_dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_png_cover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dune.png");
        image::RgbImage::new(4, 4).save(&path).unwrap();

        let cover = read_cover(path).await.unwrap();
        match cover {
            Cover::Embedded { mime, size, .. } => {
                assert_eq!(mime, "image/png");
                assert!(size > 0);
            }
            Cover::Asset(_) => panic!("expected an embedded cover"),
        }
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");

        let err = read_cover(path.clone()).await.unwrap_err();
        match err {
            CatalogError::CoverRead { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected CoverRead, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_non_image() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"just some notes, not a picture").unwrap();

        let err = read_cover(file.path().to_path_buf()).await.unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedCover));
    }

    #[test]
    fn test_picker_offers_form_image_types() {
        assert_eq!(IMAGE_EXTENSIONS, ["png", "jpg", "jpeg", "gif", "webp", "bmp"]);
        assert!(!IMAGE_EXTENSIONS.contains(&"ico"));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(encode_cover(Vec::new()), Err(CatalogError::EmptyCover)));
    }

    #[test]
    fn test_asset_cover_joins_dir() {
        let cover = asset_cover(Path::new("assets"), "book1.jpeg");
        assert_eq!(cover.asset_path(), Some(Path::new("assets/book1.jpeg")));
    }
}
