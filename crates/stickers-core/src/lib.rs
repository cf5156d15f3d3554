//! Stickers Core Library
//!
//! Drag handling for sticker items: pointer-delta tracking, disposal-zone
//! hit testing, and the shrink/restore cycle that ends in deletion when an
//! item is dropped on the disposal zone.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod input;
pub mod item;
pub mod listener;
pub mod zone;

pub use config::{
    ConfigError, ConfigResult, DragConfig, FIT_BOX_SIZE, HIT_BOX_HALF_EXTENT, SHRINK_SIZE,
    TRANSITION_DURATION_MS,
};
pub use controller::{DragController, DragOutcome, DragState};
pub use host::{AnimationRequest, HostSurface, MemorySurface, Transition, TransitionKind};
pub use input::{DragPhase, DragSession, PointerEvent};
pub use item::{DisposalState, Item, ItemId, ShrinkSnapshot};
pub use listener::{DragListener, DragNotification, NotificationLog};
pub use zone::DisposalZone;
