//! Pointer-drag events and per-drag session tracking.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Phase of a pointer drag, as reported by the host's gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    /// The recognizer gave up on the gesture.
    Failed,
}

impl DragPhase {
    /// Check if the phase is an in-progress move (`Began` or `Changed`).
    pub fn is_moving(self) -> bool {
        matches!(self, Self::Began | Self::Changed)
    }

    /// Check if the phase ends the drag session.
    pub fn is_terminal(self) -> bool {
        !self.is_moving()
    }
}

/// A single pointer-drag event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: DragPhase,
    /// Translation since the previous event of this drag.
    pub delta: Vec2,
    /// Absolute pointer position in container coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(phase: DragPhase, delta: Vec2, position: Point) -> Self {
        Self {
            phase,
            delta,
            position,
        }
    }

    pub fn began(position: Point) -> Self {
        Self::new(DragPhase::Began, Vec2::ZERO, position)
    }

    pub fn changed(delta: Vec2, position: Point) -> Self {
        Self::new(DragPhase::Changed, delta, position)
    }

    pub fn ended(delta: Vec2, position: Point) -> Self {
        Self::new(DragPhase::Ended, delta, position)
    }

    pub fn cancelled(position: Point) -> Self {
        Self::new(DragPhase::Cancelled, Vec2::ZERO, position)
    }
}

/// State of one pointer-down to pointer-up interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Phase of the most recent event.
    pub phase: DragPhase,
    /// Pointer position of the most recent event.
    pub last_pointer: Point,
    /// Sum of all deltas applied during this session.
    pub total_delta: Vec2,
    /// Number of events received, including the opening one.
    pub event_count: usize,
}

impl DragSession {
    /// Open a session from its first event.
    pub fn start(event: &PointerEvent) -> Self {
        Self {
            phase: event.phase,
            last_pointer: event.position,
            total_delta: event.delta,
            event_count: 1,
        }
    }

    /// Record a subsequent event.
    pub fn update(&mut self, event: &PointerEvent) {
        self.phase = event.phase;
        self.last_pointer = event.position;
        self.total_delta += event.delta;
        self.event_count += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_classification() {
        assert!(DragPhase::Began.is_moving());
        assert!(DragPhase::Changed.is_moving());
        assert!(DragPhase::Ended.is_terminal());
        assert!(DragPhase::Cancelled.is_terminal());
        assert!(DragPhase::Failed.is_terminal());
    }

    #[test]
    fn test_session_tracking() {
        let mut session = DragSession::start(&PointerEvent::began(Point::new(10.0, 10.0)));
        assert!(!session.is_finished());

        session.update(&PointerEvent::changed(Vec2::new(5.0, 0.0), Point::new(15.0, 10.0)));
        session.update(&PointerEvent::changed(Vec2::new(5.0, 2.0), Point::new(20.0, 12.0)));

        assert_eq!(session.last_pointer, Point::new(20.0, 12.0));
        assert!((session.total_delta.x - 10.0).abs() < f64::EPSILON);
        assert!((session.total_delta.y - 2.0).abs() < f64::EPSILON);
        assert_eq!(session.event_count, 3);

        session.update(&PointerEvent::ended(Vec2::ZERO, Point::new(20.0, 12.0)));
        assert!(session.is_finished());
    }
}
