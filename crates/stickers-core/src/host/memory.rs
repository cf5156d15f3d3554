//! In-memory host surface.

use super::{AnimationRequest, HostSurface};
use crate::item::{Item, ItemId};
use crate::zone::DisposalZone;
use kurbo::Size;
use std::collections::HashMap;

/// Headless host surface for testing and hosts without a render layer.
///
/// Animations complete instantly: the presented rotation of an item is the
/// rotation of its last requested target.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    container: Size,
    zone: Option<DisposalZone>,
    /// Attached items, back to front.
    z_order: Vec<ItemId>,
    presented: HashMap<ItemId, f64>,
    animations: Vec<AnimationRequest>,
    impacts: usize,
}

impl MemorySurface {
    /// Create a surface with the given container size and no disposal zone.
    pub fn new(container: Size) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    /// Set the disposal zone.
    pub fn with_zone(mut self, zone: DisposalZone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn set_zone(&mut self, zone: Option<DisposalZone>) {
        self.zone = zone;
    }

    /// Override the presented rotation, as if an animation were mid-flight.
    pub fn set_presented_rotation(&mut self, id: ItemId, rotation: f64) {
        self.presented.insert(id, rotation);
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.z_order.contains(&id)
    }

    /// Attached items, back to front.
    pub fn z_order(&self) -> &[ItemId] {
        &self.z_order
    }

    /// Every animation requested so far, oldest first.
    pub fn animations(&self) -> &[AnimationRequest] {
        &self.animations
    }

    /// Number of haptic pulses emitted.
    pub fn impact_count(&self) -> usize {
        self.impacts
    }
}

impl HostSurface for MemorySurface {
    fn container_size(&self) -> Size {
        self.container
    }

    fn add_item(&mut self, item: &Item) {
        self.z_order.retain(|&id| id != item.id());
        self.z_order.push(item.id());
        self.presented.insert(item.id(), item.rotation);
    }

    fn remove_item(&mut self, id: ItemId) {
        self.z_order.retain(|&item_id| item_id != id);
        self.presented.remove(&id);
    }

    fn bring_to_front(&mut self, id: ItemId) {
        if let Some(index) = self.z_order.iter().position(|&item_id| item_id == id) {
            let id = self.z_order.remove(index);
            self.z_order.push(id);
        }
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.presented.insert(request.item, request.target.rotation);
        self.animations.push(request);
    }

    fn disposal_zone(&self) -> Option<DisposalZone> {
        self.zone
    }

    fn presented_rotation(&self, id: ItemId) -> Option<f64> {
        self.presented.get(&id).copied()
    }

    fn impact_feedback(&mut self) {
        self.impacts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Transition, TransitionKind};
    use kurbo::Point;
    use std::time::Duration;

    #[test]
    fn test_add_and_remove() {
        let mut surface = MemorySurface::new(Size::new(400.0, 800.0));
        let item = Item::new(Size::new(10.0, 10.0));

        surface.add_item(&item);
        assert!(surface.contains(item.id()));

        surface.remove_item(item.id());
        assert!(!surface.contains(item.id()));
        assert!(surface.presented_rotation(item.id()).is_none());
    }

    #[test]
    fn test_bring_to_front() {
        let mut surface = MemorySurface::new(Size::new(400.0, 800.0));
        let a = Item::new(Size::new(10.0, 10.0));
        let b = Item::new(Size::new(10.0, 10.0));
        surface.add_item(&a);
        surface.add_item(&b);

        surface.bring_to_front(a.id());
        assert_eq!(surface.z_order(), &[b.id(), a.id()]);

        // Unknown ids are ignored
        surface.bring_to_front(ItemId::new_v4());
        assert_eq!(surface.z_order().len(), 2);
    }

    #[test]
    fn test_animation_commits_rotation() {
        let mut surface = MemorySurface::new(Size::new(400.0, 800.0));
        let item = Item::new(Size::new(10.0, 10.0)).with_rotation(0.5);
        surface.add_item(&item);
        assert_eq!(surface.presented_rotation(item.id()), Some(0.5));

        surface.animate(AnimationRequest {
            item: item.id(),
            kind: TransitionKind::Restore,
            duration: Duration::from_millis(200),
            target: Transition {
                center: Point::ZERO,
                size: Size::new(10.0, 10.0),
                rotation: 1.25,
            },
        });

        assert_eq!(surface.presented_rotation(item.id()), Some(1.25));
        assert_eq!(surface.animations().len(), 1);
    }
}
