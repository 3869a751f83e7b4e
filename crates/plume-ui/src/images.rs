use std::collections::HashMap;

use image::imageops::FilterType;
use image::RgbaImage;

use plume_engine::coords::Vec2;
use plume_engine::scene::ImageId;
use plume_markup::{Document, ItemKind};

use crate::resource::{ResourceError, ResourceLoader};

/// Decodes any supported image format into RGBA pixels.
pub fn decode(name: &str, bytes: &[u8]) -> Result<RgbaImage, ResourceError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| ResourceError::Decode { name: name.to_string(), message: e.to_string() })
}

/// Scales `img` to `width` pixels wide, keeping the aspect ratio.
///
/// A zero `width` or an empty image returns an unscaled copy.
pub fn resize_to_width(img: &RgbaImage, width: u32) -> RgbaImage {
    if width == 0 || img.width() == 0 {
        return img.clone();
    }
    let factor = f64::from(width) / f64::from(img.width());
    let height = (f64::from(img.height()) * factor).round().max(1.0) as u32;
    image::imageops::resize(img, width, height, FilterType::Triangle)
}

// ── ImageStore ────────────────────────────────────────────────────────────

/// Decoded images of one dialog, keyed by source and requested width.
///
/// A failed load is recorded as absent, so [`lookup`](Self::lookup) reports
/// `None` for it.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: Vec<RgbaImage>,
    index: HashMap<(String, Option<u32>), Option<ImageId>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every image item of `doc`. Failures are logged and returned;
    /// those items lay out as empty.
    pub fn load_document(&mut self, doc: &Document, loader: &dyn ResourceLoader) -> Vec<ResourceError> {
        let mut errors = Vec::new();
        for item in doc.items() {
            if let ItemKind::Image { source, resize, .. } = &item.kind {
                if let Err(e) = self.load(source, *resize, loader) {
                    errors.push(e);
                }
            }
        }
        errors
    }

    /// Fetches, decodes and optionally resizes one image.
    pub fn load(
        &mut self,
        source: &str,
        resize: Option<u32>,
        loader: &dyn ResourceLoader,
    ) -> Result<ImageId, ResourceError> {
        let key = (source.to_string(), resize);
        if let Some(Some(id)) = self.index.get(&key) {
            return Ok(*id);
        }

        let loaded = loader.load(source).and_then(|bytes| decode(source, &bytes));
        match loaded {
            Ok(img) => {
                let img = match resize {
                    Some(w) => resize_to_width(&img, w),
                    None => img,
                };
                let id = ImageId(self.images.len());
                log::debug!("image {source}: {}x{}", img.width(), img.height());
                self.images.push(img);
                self.index.insert(key, Some(id));
                Ok(id)
            }
            Err(e) => {
                log::error!("image item: {e}");
                self.index.insert(key, None);
                Err(e)
            }
        }
    }

    pub fn lookup(&self, source: &str, resize: Option<u32>) -> Option<ImageId> {
        self.index.get(&(source.to_string(), resize)).copied().flatten()
    }

    pub fn get(&self, id: ImageId) -> Option<&RgbaImage> {
        self.images.get(id.0)
    }

    /// Pixel dimensions; zero for an unknown id.
    pub fn size(&self, id: ImageId) -> Vec2 {
        self.get(id)
            .map(|img| Vec2::new(img.width() as f32, img.height() as f32))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Solid-color PNG bytes for tests.
#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::MemoryLoader;

    #[test]
    fn loads_and_reports_pixel_size() {
        let loader = MemoryLoader::new().with("/img/a.png", png_bytes(30, 20));
        let mut store = ImageStore::new();
        let id = store.load("/img/a.png", None, &loader).unwrap();
        assert_eq!(store.size(id), Vec2::new(30.0, 20.0));
        assert_eq!(store.lookup("/img/a.png", None), Some(id));
    }

    #[test]
    fn resize_keeps_aspect_ratio() {
        let loader = MemoryLoader::new().with("/a.png", png_bytes(40, 20));
        let mut store = ImageStore::new();
        let id = store.load("/a.png", Some(100), &loader).unwrap();
        assert_eq!(store.size(id), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn same_source_is_decoded_once() {
        let loader = MemoryLoader::new().with("/a.png", png_bytes(4, 4));
        let mut store = ImageStore::new();
        let a = store.load("/a.png", None, &loader).unwrap();
        let b = store.load("/a.png", None, &loader).unwrap();
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_image_is_remembered_as_absent() {
        let mut store = ImageStore::new();
        let err = store.load("/gone.png", None, &MemoryLoader::new()).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert_eq!(store.lookup("/gone.png", None), None);
        assert!(store.is_empty());
    }

    #[test]
    fn undecodable_bytes_are_decode_errors() {
        let loader = MemoryLoader::new().with("/a.png", b"not an image".to_vec());
        let err = ImageStore::new().load("/a.png", None, &loader).unwrap_err();
        assert!(matches!(err, ResourceError::Decode { .. }));
    }
}
