//! Drag controller: the per-item drag state machine.
//!
//! A drag moves the item by the pointer deltas it receives. While the pointer
//! hovers the disposal zone the item shrinks onto the zone's center; when the
//! pointer leaves, the item's original size and rotation are restored under
//! the pointer. Dropping the item with its center over the zone deletes it.

use crate::config::DragConfig;
use crate::geometry::aspect_fit;
use crate::host::{AnimationRequest, HostSurface, TransitionKind};
use crate::input::{DragPhase, DragSession, PointerEvent};
use crate::item::Item;
use crate::listener::DragListener;
use crate::zone;
use kurbo::Point;

/// Where the controller is in its drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag session.
    Idle,
    /// A drag is in progress; `near_zone` is set while the item is shrunk.
    Dragging { near_zone: bool },
}

/// Result of handling a single pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The controller is not attached to a host; nothing happened.
    Ignored,
    /// The item moved.
    Moving,
    /// The drag ended and the item stays on the surface.
    Stopped,
    /// The drag ended over the disposal zone and the item was removed.
    Deleted,
}

/// Attaches drag behavior to a single item.
pub struct DragController {
    item: Item,
    config: DragConfig,
    listener: Option<Box<dyn DragListener>>,
    session: Option<DragSession>,
    attached: bool,
}

impl DragController {
    /// Create a controller with the default configuration.
    pub fn new(item: Item) -> Self {
        Self::with_config(item, DragConfig::default())
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(item: Item, config: DragConfig) -> Self {
        Self {
            item,
            config,
            listener: None,
            session: None,
            attached: false,
        }
    }

    /// Set the listener receiving move/stop/delete notifications.
    pub fn set_listener(&mut self, listener: impl DragListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener; notifications are dropped afterwards.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The active drag session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn state(&self) -> DragState {
        match self.session {
            None => DragState::Idle,
            Some(_) => DragState::Dragging {
                near_zone: self.item.is_shrunk(),
            },
        }
    }

    /// Attach the item to a host surface.
    ///
    /// The item is aspect-fitted into the configured box and centered in
    /// the container before being added.
    pub fn attach(&mut self, host: &mut dyn HostSurface) {
        self.item.size = aspect_fit(self.item.size, self.config.fit_box);
        let container = host.container_size();
        self.item.center = Point::new(container.width / 2.0, container.height / 2.0);
        self.item.discard_snapshot();
        self.session = None;

        host.add_item(&self.item);
        self.attached = true;
        log::debug!(
            "Attached item {} at {:?} with size {:?}",
            self.item.id(),
            self.item.center,
            self.item.size
        );
    }

    /// Process one pointer-drag event.
    pub fn handle_pointer_event(
        &mut self,
        host: &mut dyn HostSurface,
        event: PointerEvent,
    ) -> DragOutcome {
        if !self.attached {
            log::debug!("Ignoring {:?} event for detached item", event.phase);
            return DragOutcome::Ignored;
        }

        match self.session.as_mut() {
            Some(session) => session.update(&event),
            None => self.session = Some(DragSession::start(&event)),
        }

        host.bring_to_front(self.item.id());
        self.item.translate(event.delta);
        log::trace!(
            "{:?}: delta {:?}, pointer {:?}, center {:?}",
            event.phase,
            event.delta,
            event.position,
            self.item.center
        );

        if event.phase.is_moving() {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_moving();
            }

            if self.is_in_disposal_zone(host, event.position) {
                self.enter_disposal_transition(host, event.position);
            } else {
                self.exit_disposal_transition(host, event.position);
            }
            return DragOutcome::Moving;
        }

        self.session = None;

        if event.phase == DragPhase::Ended && self.is_in_disposal_zone(host, self.item.center) {
            self.item.discard_snapshot();
            if let Some(listener) = self.listener.as_mut() {
                listener.on_deleted(&self.item);
            }
            host.remove_item(self.item.id());
            self.attached = false;
            log::info!("Deleted item {} on disposal zone", self.item.id());

            self.notify_stopping();
            return DragOutcome::Deleted;
        }

        // A snapshot must not outlive its drag
        self.exit_disposal_transition(host, event.position);
        self.notify_stopping();
        DragOutcome::Stopped
    }

    /// Check if a point is within the disposal hit-box.
    ///
    /// Always false when the host has no disposal zone.
    pub fn is_in_disposal_zone(&self, host: &dyn HostSurface, point: Point) -> bool {
        zone::hit_test(
            host.disposal_zone().as_ref(),
            point,
            self.config.hit_half_extent,
        )
    }

    /// Center of the host's disposal zone, if one is set.
    pub fn disposal_center(&self, host: &dyn HostSurface) -> Option<Point> {
        host.disposal_zone().map(|zone| zone.center())
    }

    /// Shrink the item onto the disposal zone's center.
    ///
    /// The first call of a shrink episode captures the snapshot, removes the
    /// presented rotation and emits a haptic pulse. Every call requests the
    /// shrink animation.
    pub fn enter_disposal_transition(&mut self, host: &mut dyn HostSurface, pointer: Point) {
        if !self.attached {
            return;
        }
        let Some(target) = self.disposal_center(host) else {
            return;
        };

        let presented = host
            .presented_rotation(self.item.id())
            .unwrap_or(self.item.rotation);
        let captured = self
            .item
            .shrink_toward(target, self.config.shrink_size, pointer, presented);
        if captured {
            log::debug!(
                "Item {} entered disposal zone (base rotation {:.3})",
                self.item.id(),
                presented
            );
            host.impact_feedback();
        }

        self.request_animation(host, TransitionKind::Shrink);
    }

    /// Restore the item's pre-shrink size and rotation under the pointer.
    ///
    /// No-op if the item is not shrunk. The snapshot is released
    /// immediately, without waiting for the animation.
    pub fn exit_disposal_transition(&mut self, host: &mut dyn HostSurface, pointer: Point) {
        if !self.attached || !self.item.restore_at(pointer) {
            return;
        }

        log::debug!("Item {} left disposal zone", self.item.id());
        self.request_animation(host, TransitionKind::Restore);
    }

    fn request_animation(&self, host: &mut dyn HostSurface, kind: TransitionKind) {
        host.animate(AnimationRequest {
            item: self.item.id(),
            kind,
            duration: self.config.transition_duration(),
            target: self.item.transition(),
        });
    }

    fn notify_stopping(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_stopping(&self.item);
        }
    }
}

impl std::fmt::Debug for DragController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragController")
            .field("item", &self.item)
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .field("session", &self.session)
            .field("attached", &self.attached)
            .finish()
    }
}
