//! The contract input adapters use to drive a drag.
//!
//! A sensor first asks the engine for a [`LockClaim`] on a draggable, then
//! passes that claim to every drag action. Only one claim is active at a
//! time across every engine on the thread, and a forced abort invalidates
//! it, so a sensor that lost its drag cannot keep moving the item.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use astrelis_core::math::Vec2;

use crate::descriptor::{DraggableId, MovementMode};
use crate::error::{DndError, DndResult};

/// Arguments for starting a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftArgs {
    pub client_selection: Vec2,
    pub movement_mode: MovementMode,
}

impl LiftArgs {
    pub fn fluid(client_selection: Vec2) -> Self {
        Self {
            client_selection,
            movement_mode: MovementMode::Fluid,
        }
    }

    pub fn snap(client_selection: Vec2) -> Self {
        Self {
            client_selection,
            movement_mode: MovementMode::Snap,
        }
    }
}

#[derive(Debug, Default)]
struct LockState {
    /// The active claim and the engine holding it.
    active: Option<(u64, u64)>,
    next_claim: u64,
    next_owner: u64,
}

thread_local! {
    static LOCK: Rc<RefCell<LockState>> = Rc::new(RefCell::new(LockState::default()));
}

/// An engine's handle on the drag lock.
///
/// Every handle on a thread shares one lock, so only one drag is active at
/// a time no matter how many engines exist. Abandonment is tracked per
/// handle so an engine only reacts to its own lost claims.
#[derive(Debug)]
pub struct DragLock {
    owner: u64,
    state: Rc<RefCell<LockState>>,
    /// A claim was dropped without being released.
    abandoned: Rc<Cell<bool>>,
}

impl DragLock {
    pub(crate) fn new() -> Self {
        let state = LOCK.with(Rc::clone);
        let owner = {
            let mut shared = state.borrow_mut();
            shared.next_owner += 1;
            shared.next_owner
        };
        Self {
            owner,
            state,
            abandoned: Rc::new(Cell::new(false)),
        }
    }

    /// Whether any engine holds the lock.
    pub fn is_claimed(&self) -> bool {
        self.state.borrow().active.is_some()
    }

    /// Whether this engine holds the lock.
    pub fn is_held(&self) -> bool {
        matches!(self.state.borrow().active, Some((_, owner)) if owner == self.owner)
    }

    pub(crate) fn claim(&self, draggable_id: DraggableId) -> DndResult<LockClaim> {
        let mut state = self.state.borrow_mut();
        if state.active.is_some() {
            return Err(DndError::LockAlreadyClaimed);
        }

        state.next_claim += 1;
        let id = state.next_claim;
        state.active = Some((id, self.owner));
        self.abandoned.set(false);

        Ok(LockClaim {
            id,
            draggable_id,
            state: Rc::clone(&self.state),
            abandoned: Rc::clone(&self.abandoned),
        })
    }

    /// Release this engine's claim, if it has one. The claim holder finds
    /// out on its next action.
    pub(crate) fn invalidate(&self) {
        if self.is_held() {
            self.state.borrow_mut().active = None;
        }
        self.abandoned.set(false);
    }

    /// Whether a claim was dropped mid-drag since the last check.
    pub(crate) fn take_abandoned(&self) -> bool {
        self.abandoned.take()
    }
}

impl Drop for DragLock {
    fn drop(&mut self) {
        self.invalidate();
    }
}

/// Proof of holding the drag lock.
///
/// Dropping a claim that is still active releases the lock and tells the
/// engine to abort the drag.
#[derive(Debug)]
pub struct LockClaim {
    id: u64,
    draggable_id: DraggableId,
    state: Rc<RefCell<LockState>>,
    abandoned: Rc<Cell<bool>>,
}

impl LockClaim {
    pub fn draggable_id(&self) -> &DraggableId {
        &self.draggable_id
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state.borrow().active, Some((id, _)) if id == self.id)
    }

    pub(crate) fn ensure_active(&self) -> DndResult<()> {
        if self.is_active() {
            Ok(())
        } else {
            Err(DndError::InactiveLock)
        }
    }

    /// Give the lock back after a completed drag.
    pub fn release(self) {
        if self.is_active() {
            self.state.borrow_mut().active = None;
        }
    }
}

impl Drop for LockClaim {
    fn drop(&mut self) {
        if self.is_active() {
            self.state.borrow_mut().active = None;
            self.abandoned.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_claim() {
        let lock = DragLock::new();
        let claim = lock.claim("a".into()).unwrap();
        assert!(lock.is_claimed());
        assert_eq!(lock.claim("b".into()).unwrap_err(), DndError::LockAlreadyClaimed);

        claim.release();
        assert!(!lock.is_claimed());
        assert!(!lock.take_abandoned());
    }

    #[test]
    fn test_dropped_claim_is_abandoned() {
        let lock = DragLock::new();
        drop(lock.claim("a".into()).unwrap());
        assert!(!lock.is_claimed());
        assert!(lock.take_abandoned());
        assert!(!lock.take_abandoned());
    }

    #[test]
    fn test_invalidated_claim_is_stale() {
        let lock = DragLock::new();
        let stale = lock.claim("a".into()).unwrap();
        lock.invalidate();
        assert_eq!(stale.ensure_active(), Err(DndError::InactiveLock));

        let fresh = lock.claim("a".into()).unwrap();
        assert!(fresh.is_active());
        // A stale claim going away must not touch the new one
        drop(stale);
        assert!(fresh.is_active());
        assert!(!lock.take_abandoned());
    }

    #[test]
    fn test_lock_is_shared_between_handles() {
        let first = DragLock::new();
        let second = DragLock::new();

        let claim = first.claim("a".into()).unwrap();
        assert!(second.is_claimed());
        assert!(!second.is_held());
        assert_eq!(second.claim("b".into()).unwrap_err(), DndError::LockAlreadyClaimed);

        // Another handle cannot release a claim it does not hold
        second.invalidate();
        assert!(claim.is_active());

        drop(claim);
        assert!(first.take_abandoned());
        assert!(!second.take_abandoned());
        assert!(second.claim("b".into()).is_ok());
    }

    #[test]
    fn test_dropping_handle_releases_its_claim() {
        let first = DragLock::new();
        let claim = first.claim("a".into()).unwrap();
        drop(first);

        assert!(!claim.is_active());
        let second = DragLock::new();
        assert!(!second.is_claimed());
    }
}
