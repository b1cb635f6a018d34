//! Game Phase
//!
//! Central phase tracking with change notifications. Systems that react to
//! phase transitions subscribe for a mailbox and drain it during their own
//! update; dropping the listener unsubscribes it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Top-level phases the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Normal play; the player can act.
    Playing,
    /// Suspended by the pause menu.
    Paused,
    /// Settings screen is open.
    Settings,
    /// The run has ended.
    GameOver,
}

impl GamePhase {
    /// True for the one phase in which the player may act.
    pub fn is_playing(self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

type PhaseInbox = Rc<RefCell<VecDeque<GamePhase>>>;

/// Receiving end of a phase subscription.
///
/// Queues every phase change published since the last drain, in order.
/// Dropping the listener unsubscribes it from the manager.
#[derive(Debug)]
pub struct PhaseListener {
    inbox: PhaseInbox,
}

impl PhaseListener {
    /// Take the oldest undelivered phase change, if any.
    pub fn poll(&self) -> Option<GamePhase> {
        self.inbox.borrow_mut().pop_front()
    }

    /// Number of undelivered notifications.
    pub fn pending(&self) -> usize {
        self.inbox.borrow().len()
    }
}

/// Tracks the current phase and notifies subscribers on changes.
///
/// Single-threaded: listeners are weak handles to plain refcounted
/// queues, drained cooperatively inside each subscriber's own update.
#[derive(Debug)]
pub struct PhaseManager {
    /// Current phase
    phase: GamePhase,
    /// Subscriber mailboxes; dead entries are pruned on publish
    listeners: Vec<Weak<RefCell<VecDeque<GamePhase>>>>,
}

impl Default for PhaseManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseManager {
    /// Create a manager starting in the Playing phase.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            listeners: Vec::new(),
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Switch phase and notify subscribers.
    ///
    /// Setting the phase it is already in publishes nothing.
    pub fn set_phase(&mut self, phase: GamePhase) {
        if phase == self.phase {
            return;
        }
        self.phase = phase;

        self.listeners.retain(|weak| {
            if let Some(inbox) = weak.upgrade() {
                inbox.borrow_mut().push_back(phase);
                true
            } else {
                false
            }
        });
    }

    /// Flip between Playing and Paused; other phases are left alone.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.set_phase(GamePhase::Paused),
            GamePhase::Paused => self.set_phase(GamePhase::Playing),
            _ => {}
        }
    }

    /// Register a new listener for phase changes.
    pub fn subscribe(&mut self) -> PhaseListener {
        let inbox: PhaseInbox = Rc::new(RefCell::new(VecDeque::new()));
        self.listeners.push(Rc::downgrade(&inbox));
        PhaseListener { inbox }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
