//! Drag Session State Machine
//!
//! `Idle -> Armed -> Active -> {Committed | Cancelled} -> Idle`.
//!
//! A session exists only between press and release. It never touches the
//! card model itself; `release` reports the commit and the caller applies it.

use thiserror::Error;

use crate::geometry::Point;
use crate::gesture::{HoverTarget, InputSource};

/// Why a press did not arm a session
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArmError {
    #[error("slot already holds item {0}")]
    SlotOccupied(u32),
    #[error("a drag of item {0} is already in progress")]
    Busy(u32),
    #[error("drag controller has been disposed")]
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pressed, not moved yet
    Armed,
    /// Moved past the activation threshold
    Active,
}

/// The single in-flight drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub item: u32,
    pub input: InputSource,
    pub origin: Point,
    pub pointer: Point,
    pub hover: Option<HoverTarget>,
    pub phase: Phase,
    /// Item was in the slot when the press happened
    pub from_slot: bool,
}

/// Model mutation produced by a committed drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    /// Place the item in the slot
    ToSlot(u32),
    /// Return the slotted item to the source list
    ToSource(u32),
}

/// Result of ending a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Commit(Commit),
    Cancelled,
    /// Released before the first move (a click)
    NotStarted,
    /// There was no session
    Idle,
}

#[derive(Clone, Debug, Default)]
pub struct DragMachine {
    session: Option<DragSession>,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.session, Some(DragSession { phase: Phase::Active, .. }))
    }

    /// `Idle -> Armed`.
    ///
    /// `slotted` is the item currently in the slot, if any. While it holds a
    /// different item no other item may be picked up.
    pub fn arm(
        &mut self,
        item: u32,
        at: Point,
        input: InputSource,
        slotted: Option<u32>,
    ) -> Result<(), ArmError> {
        if let Some(current) = &self.session {
            return Err(ArmError::Busy(current.item));
        }
        if let Some(occupant) = slotted.filter(|occupant| *occupant != item) {
            return Err(ArmError::SlotOccupied(occupant));
        }
        self.session = Some(DragSession {
            item,
            input,
            origin: at,
            pointer: at,
            hover: None,
            phase: Phase::Armed,
            from_slot: slotted == Some(item),
        });
        Ok(())
    }

    /// Record a move. Promotes `Armed -> Active` once the pointer leaves the
    /// activation threshold. Returns whether the session is active.
    pub fn track(&mut self, at: Point, hover: Option<HoverTarget>) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.pointer = at;
        session.hover = hover;
        if session.phase == Phase::Armed
            && at.moved_beyond(session.origin, session.input.activation_threshold())
        {
            session.phase = Phase::Active;
        }
        session.phase == Phase::Active
    }

    /// End the session on release and decide its outcome
    pub fn release(&mut self) -> DropOutcome {
        let Some(session) = self.session.take() else {
            return DropOutcome::Idle;
        };
        if session.phase == Phase::Armed {
            return DropOutcome::NotStarted;
        }
        match session.hover {
            Some(HoverTarget::Slot) => DropOutcome::Commit(Commit::ToSlot(session.item)),
            Some(HoverTarget::Source) if session.from_slot => {
                DropOutcome::Commit(Commit::ToSource(session.item))
            }
            _ => DropOutcome::Cancelled,
        }
    }

    /// Abort without any model change
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Point = Point::new(100.0, 800.0);
    const FAR: Point = Point::new(300.0, 120.0);

    fn active(machine: &mut DragMachine, item: u32, slotted: Option<u32>, hover: Option<HoverTarget>) {
        machine.arm(item, START, InputSource::Mouse, slotted).unwrap();
        assert!(machine.track(FAR, hover));
    }

    #[test]
    fn test_drop_on_slot_commits() {
        let mut machine = DragMachine::new();
        active(&mut machine, 2, None, Some(HoverTarget::Slot));
        assert_eq!(machine.release(), DropOutcome::Commit(Commit::ToSlot(2)));
        assert!(machine.is_idle());
    }

    #[test]
    fn test_slotted_item_returns_to_source() {
        let mut machine = DragMachine::new();
        active(&mut machine, 2, Some(2), Some(HoverTarget::Source));
        assert_eq!(machine.release(), DropOutcome::Commit(Commit::ToSource(2)));
    }

    #[test]
    fn test_source_item_dropped_on_source_is_cancelled() {
        let mut machine = DragMachine::new();
        active(&mut machine, 1, None, Some(HoverTarget::Source));
        assert_eq!(machine.release(), DropOutcome::Cancelled);
    }

    #[test]
    fn test_release_over_nothing_or_item_cancels() {
        let mut machine = DragMachine::new();
        active(&mut machine, 1, None, None);
        assert_eq!(machine.release(), DropOutcome::Cancelled);

        active(&mut machine, 3, Some(3), Some(HoverTarget::Item(3)));
        assert_eq!(machine.release(), DropOutcome::Cancelled);
        assert!(machine.is_idle());
    }

    #[test]
    fn test_arm_rejected_while_slot_holds_other_item() {
        let mut machine = DragMachine::new();
        let result = machine.arm(1, START, InputSource::Touch, Some(3));
        assert_eq!(result, Err(ArmError::SlotOccupied(3)));
        assert!(machine.is_idle());
        assert_eq!(machine.release(), DropOutcome::Idle);
    }

    #[test]
    fn test_second_arm_rejected_while_active() {
        let mut machine = DragMachine::new();
        active(&mut machine, 1, None, None);
        assert_eq!(
            machine.arm(2, START, InputSource::Touch, None),
            Err(ArmError::Busy(1))
        );
        assert_eq!(machine.session().map(|s| s.item), Some(1));
    }

    #[test]
    fn test_mouse_click_without_move_never_activates() {
        let mut machine = DragMachine::new();
        machine.arm(1, START, InputSource::Mouse, None).unwrap();
        assert!(!machine.track(Point::new(103.0, 797.0), Some(HoverTarget::Slot)));
        assert_eq!(machine.release(), DropOutcome::NotStarted);
    }

    #[test]
    fn test_touch_activates_on_first_move() {
        let mut machine = DragMachine::new();
        machine.arm(1, START, InputSource::Touch, None).unwrap();
        assert!(machine.track(Point::new(100.0, 799.0), None));
        assert!(machine.is_active());
    }

    #[test]
    fn test_hover_is_last_known_target() {
        let mut machine = DragMachine::new();
        active(&mut machine, 1, None, Some(HoverTarget::Slot));
        machine.track(Point::new(10.0, 10.0), None);
        assert_eq!(machine.release(), DropOutcome::Cancelled);
    }

    #[test]
    fn test_cancel_clears_session() {
        let mut machine = DragMachine::new();
        active(&mut machine, 1, None, Some(HoverTarget::Slot));
        assert!(machine.cancel());
        assert!(machine.is_idle());
        assert!(!machine.cancel());
        assert_eq!(machine.release(), DropOutcome::Idle);
    }

    #[test]
    fn test_dropping_slotted_item_on_slot_again_reports_to_slot() {
        let mut machine = DragMachine::new();
        active(&mut machine, 4, Some(4), Some(HoverTarget::Slot));
        assert_eq!(machine.release(), DropOutcome::Commit(Commit::ToSlot(4)));
    }
}
