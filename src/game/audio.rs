//! Audio Triggers
//!
//! Fire-and-forget sound effect requests. Gameplay systems emit sound ids
//! through the [`AudioSink`] trait; the host mixer decides what they sound
//! like. [`SoundQueue`] is the stock sink: it queues ids for the host to
//! drain once per frame.

use std::cell::RefCell;
use std::rc::Rc;

/// Default id for the footstep sound on a successful move.
pub const SOUND_WALK: &str = "walk";
/// Default id for the blocked-move sound.
pub const SOUND_BUMP: &str = "bump";

/// Audio-trigger service consumed by gameplay systems.
pub trait AudioSink {
    /// Request playback of a named sound effect.
    fn play(&mut self, sound_id: &str);
}

/// Queues requested sound ids for the host mixer to drain each frame.
#[derive(Debug, Clone, Default)]
pub struct SoundQueue {
    queued: Vec<String>,
}

impl SoundQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued sound ids, oldest first.
    pub fn drain_queued(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queued)
    }

    /// Number of sounds waiting to be drained.
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

impl AudioSink for SoundQueue {
    fn play(&mut self, sound_id: &str) {
        self.queued.push(sound_id.to_string());
    }
}

/// Forwarding impl for shared handles, letting a host keep access to the
/// sink it hands a gameplay system.
impl<S: AudioSink> AudioSink for Rc<RefCell<S>> {
    fn play(&mut self, sound_id: &str) {
        self.borrow_mut().play(sound_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_collects_in_order() {
        let mut queue = SoundQueue::new();
        queue.play(SOUND_WALK);
        queue.play(SOUND_BUMP);
        queue.play(SOUND_WALK);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.drain_queued(), vec!["walk", "bump", "walk"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = SoundQueue::new();
        queue.play("door_creak");

        assert_eq!(queue.drain_queued().len(), 1);
        assert!(queue.drain_queued().is_empty());
    }

    #[test]
    fn test_shared_handle_forwards() {
        let queue = Rc::new(RefCell::new(SoundQueue::new()));
        let mut handle = queue.clone();

        handle.play(SOUND_BUMP);
        assert_eq!(queue.borrow_mut().drain_queued(), vec!["bump"]);
    }
}
