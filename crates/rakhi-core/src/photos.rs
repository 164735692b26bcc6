//! Photo shape creator.
//!
//! Photos are scattered on a canvas and can be pulled into one of the
//! [`Shape`]s. They live in memory only and are dropped with the board.

use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, ImageFormat};
use rand::Rng;

use crate::achievements::{Achievement, AchievementSink};
use crate::error::GiftResult;
use crate::shapes::{Shape, ShapePoint};
use crate::types::{ItemId, ItemIdGenerator};

/// Longest edge kept when embedding a picked image
pub const MAX_EDGE: u32 = 800;

/// Decode an image file and re-embed it as a PNG `data:` URL.
///
/// Images larger than [`MAX_EDGE`] are scaled down first.
pub fn photo_data_url(bytes: &[u8]) -> GiftResult<String> {
    let img = image::load_from_memory(bytes)?;
    let img = shrink(img);

    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(format!("data:image/png;base64,{encoded}"))
}

fn shrink(img: DynamicImage) -> DynamicImage {
    if img.width() > MAX_EDGE || img.height() > MAX_EDGE {
        img.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        img
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoItem {
    pub id: ItemId,
    pub name: String,
    /// `data:` URL of the image
    pub url: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    /// Shape point this photo was last arranged onto
    pub slot: Option<ShapePoint>,
}

#[derive(Debug, Default)]
pub struct PhotoBoard {
    photos: Vec<PhotoItem>,
    shape: Shape,
    ids: ItemIdGenerator,
}

impl PhotoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photos(&self) -> &[PhotoItem] {
        &self.photos
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn select_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Drop a photo at a random spot on the canvas
    pub fn add(
        &mut self,
        name: impl Into<String>,
        url: String,
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> ItemId {
        let id = self.ids.next_id();
        self.photos.push(PhotoItem {
            id: id.clone(),
            name: name.into(),
            url,
            x: rng.random_range(10.0..90.0),
            y: rng.random_range(10.0..90.0),
            rotation: rng.random_range(0.0..360.0),
            scale: rng.random_range(0.7..1.3),
            slot: None,
        });

        tracing::debug!(%id, total = self.photos.len(), "Photo added");
        achievements.unlock(Achievement::PhotoUploader);
        id
    }

    /// Decode raw image bytes and add the result
    pub fn add_image_bytes(
        &mut self,
        name: impl Into<String>,
        bytes: &[u8],
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> GiftResult<ItemId> {
        let url = photo_data_url(bytes)?;
        Ok(self.add(name, url, rng, achievements))
    }

    /// Move photo `i` to `points[i mod K]` of the selected shape.
    ///
    /// With `orbit` set, each photo lands 5 to 15 units away from its point
    /// in a random direction. Returns false when there is nothing to arrange.
    pub fn arrange(
        &mut self,
        orbit: bool,
        rng: &mut impl Rng,
        achievements: &mut dyn AchievementSink,
    ) -> bool {
        if self.photos.is_empty() {
            return false;
        }

        let shape = self.shape;
        for (index, photo) in self.photos.iter_mut().enumerate() {
            let point = shape.point(index);
            let (dx, dy) = if orbit {
                let radius: f64 = rng.random_range(5.0..15.0);
                let angle: f64 = rng.random_range(0.0..std::f64::consts::TAU);
                (angle.cos() * radius, angle.sin() * radius)
            } else {
                (0.0, 0.0)
            };
            photo.x = point.x + dx;
            photo.y = point.y + dy;
            photo.rotation = point.rotation;
            photo.scale = rng.random_range(0.8..1.2);
            photo.slot = Some(point);
        }

        tracing::debug!(shape = shape.name(), count = self.photos.len(), "Photos arranged");
        achievements.unlock(Achievement::ShapeDesigner);
        true
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<PhotoItem> {
        let index = self.photos.iter().position(|photo| &photo.id == id)?;
        Some(self.photos.remove(index))
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTracker;
    use crate::storage::{MemoryStore, Persistence};
    use image::{ImageBuffer, Rgba};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgba([255u8, 105, 180, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn setup() -> (PhotoBoard, AchievementTracker, StdRng) {
        (
            PhotoBoard::new(),
            AchievementTracker::mount(Persistence::new(MemoryStore::new())),
            StdRng::seed_from_u64(8),
        )
    }

    #[test]
    fn test_data_url_round_trips_through_decoder() {
        let url = photo_data_url(&png_bytes(4, 3)).unwrap();
        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
        let img = image::load_from_memory(&decoded).unwrap();
        assert_eq!((img.width(), img.height()), (4, 3));
    }

    #[test]
    fn test_large_images_are_shrunk() {
        let url = photo_data_url(&png_bytes(1600, 400)).unwrap();
        let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).unwrap();
        let img = image::load_from_memory(&decoded).unwrap();
        assert_eq!(img.width(), MAX_EDGE);
        assert_eq!(img.height(), 200);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(photo_data_url(b"definitely not an image").is_err());
    }

    #[test]
    fn test_add_places_on_canvas() {
        let (mut board, mut achievements, mut rng) = setup();
        for i in 0..20 {
            board.add(format!("p{i}"), String::new(), &mut rng, &mut achievements);
        }
        for photo in board.photos() {
            assert!((10.0..90.0).contains(&photo.x));
            assert!((10.0..90.0).contains(&photo.y));
            assert!((0.7..1.3).contains(&photo.scale));
        }
        assert!(achievements.contains("Photo Uploader"));
    }

    #[test]
    fn test_arrange_wraps_shape_points() {
        let (mut board, mut achievements, mut rng) = setup();
        assert!(!board.arrange(false, &mut rng, &mut achievements));

        for i in 0..15 {
            board.add(format!("p{i}"), String::new(), &mut rng, &mut achievements);
        }
        board.select_shape(Shape::Star);
        assert!(board.arrange(false, &mut rng, &mut achievements));

        for (i, photo) in board.photos().iter().enumerate() {
            let point = Shape::Star.point(i % 10);
            assert_eq!((photo.x, photo.y), (point.x, point.y));
            assert_eq!(photo.slot, Some(point));
        }
        assert!(achievements.contains("Shape Designer"));
    }

    #[test]
    fn test_orbit_stays_near_point() {
        let (mut board, mut achievements, mut rng) = setup();
        for i in 0..30 {
            board.add(format!("p{i}"), String::new(), &mut rng, &mut achievements);
        }
        board.select_shape(Shape::Rakhi);
        board.arrange(true, &mut rng, &mut achievements);

        for photo in board.photos() {
            let slot = photo.slot.unwrap();
            let distance = ((photo.x - slot.x).powi(2) + (photo.y - slot.y).powi(2)).sqrt();
            assert!((5.0 - 1e-9..15.0 + 1e-9).contains(&distance));
        }
    }

    #[test]
    fn test_remove_and_clear() {
        let (mut board, mut achievements, mut rng) = setup();
        let id = board.add("a", String::new(), &mut rng, &mut achievements);
        board.add("b", String::new(), &mut rng, &mut achievements);

        assert_eq!(board.remove(&id).unwrap().name, "a");
        assert!(board.remove(&id).is_none());
        board.clear();
        assert!(board.photos().is_empty());
    }
}
