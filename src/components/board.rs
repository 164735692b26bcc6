//! Dragging pinned items around a board.
//!
//! Items are positioned in percent of the board so the layout survives
//! window resizes. A drag remembers where the pointer went down and where
//! the item was, and the drop converts the pointer travel into percent.

use std::rc::Rc;

use dioxus::prelude::*;
use rakhi_core::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    pub id: ItemId,
    /// Pointer position at mousedown, in client pixels
    pub start: (f64, f64),
    /// Item position at mousedown, in percent
    pub origin: (f64, f64),
}

impl Drag {
    pub fn begin(id: ItemId, event: &MouseEvent, origin: (f64, f64)) -> Self {
        let point = event.client_coordinates();
        Self {
            id,
            start: (point.x, point.y),
            origin,
        }
    }

    /// Item position after the pointer moved to `end` on a board of `size`
    pub fn drop_at(&self, end: (f64, f64), size: (f64, f64)) -> (f64, f64) {
        let (width, height) = size;
        if width <= 0.0 || height <= 0.0 {
            return self.origin;
        }
        let dx = (end.0 - self.start.0) / width * 100.0;
        let dy = (end.1 - self.start.1) / height * 100.0;
        (self.origin.0 + dx, self.origin.1 + dy)
    }
}

/// Board size in pixels, if it has been mounted
pub async fn board_size(board: Option<Rc<MountedData>>) -> Option<(f64, f64)> {
    let rect = board?.get_client_rect().await.ok()?;
    Some((rect.size.width, rect.size.height))
}

/// Finish `drag` with the pointer at `end`; returns the item and its new
/// position once the board has been measured.
pub async fn finish_drag(
    drag: Drag,
    board: Option<Rc<MountedData>>,
    end: (f64, f64),
) -> Option<(ItemId, f64, f64)> {
    let size = board_size(board).await?;
    let (x, y) = drag.drop_at(end, size);
    Some((drag.id, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag() -> Drag {
        Drag {
            id: ItemId::from_string("note"),
            start: (100.0, 100.0),
            origin: (20.0, 30.0),
        }
    }

    #[test]
    fn test_drop_converts_pixels_to_percent() {
        let (x, y) = drag().drop_at((200.0, 150.0), (1000.0, 500.0));
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmeasured_board_keeps_origin() {
        assert_eq!(drag().drop_at((500.0, 500.0), (0.0, 0.0)), (20.0, 30.0));
    }
}
