//! Drag notifications pushed to the item's owner.

use crate::item::{Item, ItemId};
use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of drag notifications.
///
/// Every method defaults to a no-op so listeners only implement what they
/// care about.
pub trait DragListener {
    /// The item moved during a `Began` or `Changed` event.
    fn on_moving(&mut self) {}

    /// The drag session ended, whether or not the item was deleted.
    fn on_stopping(&mut self, _item: &Item) {}

    /// The item was dropped on the disposal zone and is being removed.
    fn on_deleted(&mut self, _item: &Item) {}
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragNotification {
    Moving,
    Stopping(ItemId),
    Deleted(ItemId),
}

/// Listener that records notifications into a shared log.
///
/// Clones share the same log, so one clone can be handed to a controller
/// while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<DragNotification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notifications received so far.
    pub fn entries(&self) -> Vec<DragNotification> {
        self.entries.borrow().clone()
    }

    /// Number of recorded notifications matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DragNotification) -> bool) -> usize {
        self.entries.borrow().iter().filter(|n| predicate(n)).count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl DragListener for NotificationLog {
    fn on_moving(&mut self) {
        self.entries.borrow_mut().push(DragNotification::Moving);
    }

    fn on_stopping(&mut self, item: &Item) {
        self.entries
            .borrow_mut()
            .push(DragNotification::Stopping(item.id()));
    }

    fn on_deleted(&mut self, item: &Item) {
        self.entries
            .borrow_mut()
            .push(DragNotification::Deleted(item.id()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn test_clones_share_log() {
        let log = NotificationLog::new();
        let mut listener = log.clone();
        let item = Item::new(Size::new(10.0, 10.0));

        listener.on_moving();
        listener.on_deleted(&item);
        listener.on_stopping(&item);

        assert_eq!(
            log.entries(),
            vec![
                DragNotification::Moving,
                DragNotification::Deleted(item.id()),
                DragNotification::Stopping(item.id()),
            ]
        );
        assert_eq!(log.count(|n| *n == DragNotification::Moving), 1);

        log.clear();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Silent;
        impl DragListener for Silent {}

        let item = Item::new(Size::new(10.0, 10.0));
        let mut silent = Silent;
        silent.on_moving();
        silent.on_stopping(&item);
        silent.on_deleted(&item);
    }
}
