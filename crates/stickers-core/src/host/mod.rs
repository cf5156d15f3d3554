//! Host surface abstraction.
//!
//! The host owns rendering, layout of the container and the disposal zone,
//! and the animation engine. The controller only issues requests to it.

mod memory;

pub use memory::MemorySurface;

use crate::item::{Item, ItemId};
use crate::zone::DisposalZone;
use kurbo::{Point, Size};
use std::time::Duration;

/// Target geometry of an animated transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub center: Point,
    pub size: Size,
    /// Rotation in radians.
    pub rotation: f64,
}

/// What a transition is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Shrink onto the disposal zone center.
    Shrink,
    /// Restore the pre-shrink geometry.
    Restore,
}

/// A fire-and-forget request to animate an item to a target geometry.
///
/// A new request for the same item supersedes any in-flight one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub item: ItemId,
    pub kind: TransitionKind,
    pub duration: Duration,
    pub target: Transition,
}

/// Services the controller consumes from the container that hosts an item.
///
/// All calls happen synchronously on the thread delivering pointer events.
pub trait HostSurface {
    /// Size of the container the item is laid out in.
    fn container_size(&self) -> Size;

    /// Attach an item to the visual hierarchy.
    fn add_item(&mut self, item: &Item);

    /// Detach an item from the visual hierarchy.
    fn remove_item(&mut self, id: ItemId);

    /// Raise an item above its siblings.
    fn bring_to_front(&mut self, id: ItemId);

    /// Animate an item toward a target geometry.
    fn animate(&mut self, request: AnimationRequest);

    /// Current disposal zone, `None` when disposal is disabled.
    fn disposal_zone(&self) -> Option<DisposalZone>;

    /// Rotation as currently rendered, which may lag the committed value
    /// while an animation is in flight.
    ///
    /// Hosts without a presentation layer return `None`, and the item's
    /// committed rotation is used instead.
    fn presented_rotation(&self, _id: ItemId) -> Option<f64> {
        None
    }

    /// Emit a one-shot haptic pulse.
    fn impact_feedback(&mut self) {}
}
