//! Draggable item geometry and its shrink snapshot.

use crate::geometry::{center_of, frame_of, offset_from, origin_of};
use crate::host::Transition;
use kurbo::{Point, Rect, Size, Vec2};
use uuid::Uuid;

/// Unique identifier for an item.
pub type ItemId = Uuid;

/// Geometry captured when an item first approaches the disposal zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkSnapshot {
    /// Item size before shrinking.
    pub original_size: Size,
    /// Vector from the item's origin to the pointer at capture time.
    pub touch_offset: Vec2,
    /// Rotation removed for the shrink and re-applied on restore.
    pub base_rotation: f64,
}

/// Whether an item is currently shrunk over the disposal zone.
///
/// The snapshot fields only exist together, inside `Shrunk`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisposalState {
    /// Normal size, position and rotation.
    #[default]
    Normal,
    /// Shrunk toward the disposal zone.
    Shrunk(ShrinkSnapshot),
}

impl DisposalState {
    /// Check if a snapshot is held.
    pub fn is_shrunk(&self) -> bool {
        matches!(self, Self::Shrunk(_))
    }
}

/// A draggable item, stored as a center-anchored frame plus rotation.
#[derive(Debug, Clone)]
pub struct Item {
    pub(crate) id: ItemId,
    /// Current logical center in container coordinates.
    pub center: Point,
    /// Current logical size.
    pub size: Size,
    /// Applied rotation in radians.
    pub rotation: f64,
    disposal: DisposalState,
}

impl Item {
    /// Create a new item of the given size, centered at the origin.
    pub fn new(size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            center: Point::ZERO,
            size,
            rotation: 0.0,
            disposal: DisposalState::Normal,
        }
    }

    /// Set the initial center.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Set the initial rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Top-left corner of the item's frame.
    pub fn origin(&self) -> Point {
        origin_of(self.center, self.size)
    }

    /// The item's unrotated frame.
    pub fn frame(&self) -> Rect {
        frame_of(self.center, self.size)
    }

    pub fn disposal_state(&self) -> &DisposalState {
        &self.disposal
    }

    pub fn is_shrunk(&self) -> bool {
        self.disposal.is_shrunk()
    }

    /// The held snapshot, if shrunk.
    pub fn snapshot(&self) -> Option<&ShrinkSnapshot> {
        match &self.disposal {
            DisposalState::Shrunk(snapshot) => Some(snapshot),
            DisposalState::Normal => None,
        }
    }

    pub fn original_size(&self) -> Option<Size> {
        self.snapshot().map(|s| s.original_size)
    }

    pub fn touch_offset(&self) -> Option<Vec2> {
        self.snapshot().map(|s| s.touch_offset)
    }

    /// Rotation captured for the current shrink episode, 0 when normal.
    pub fn base_rotation(&self) -> f64 {
        self.snapshot().map_or(0.0, |s| s.base_rotation)
    }

    /// Current geometry as an animation target.
    pub fn transition(&self) -> Transition {
        Transition {
            center: self.center,
            size: self.size,
            rotation: self.rotation,
        }
    }

    /// Move the item by a pointer delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Shrink onto `target` with size `shrink_size`.
    ///
    /// The snapshot is captured only if none is held: `presented_rotation`
    /// is removed from the item and remembered, along with the current size
    /// and the pointer's offset from the origin. Returns true if a snapshot
    /// was captured by this call.
    pub fn shrink_toward(
        &mut self,
        target: Point,
        shrink_size: Size,
        pointer: Point,
        presented_rotation: f64,
    ) -> bool {
        let captured = match self.disposal {
            DisposalState::Normal => {
                self.rotation -= presented_rotation;
                self.disposal = DisposalState::Shrunk(ShrinkSnapshot {
                    original_size: self.size,
                    touch_offset: offset_from(self.origin(), pointer),
                    base_rotation: presented_rotation,
                });
                true
            }
            DisposalState::Shrunk(_) => false,
        };

        self.size = shrink_size;
        self.center = target;
        captured
    }

    /// Restore the snapshot, re-anchoring the item under `pointer`.
    ///
    /// Returns false and changes nothing if no snapshot is held.
    pub fn restore_at(&mut self, pointer: Point) -> bool {
        let DisposalState::Shrunk(snapshot) = std::mem::take(&mut self.disposal) else {
            return false;
        };

        self.size = snapshot.original_size;
        self.center = center_of(pointer - snapshot.touch_offset, snapshot.original_size);
        self.rotation += snapshot.base_rotation;
        true
    }

    /// Drop any held snapshot without touching geometry.
    pub fn discard_snapshot(&mut self) {
        self.disposal = DisposalState::Normal;
    }
}
