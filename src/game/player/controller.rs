//! Move Controller
//!
//! Translates held direction keys into discrete move attempts on the dungeon
//! grid. Applies the move-delay gate and key-repeat timing, forwards
//! attempts to the dungeon world, and requests walk/bump feedback sounds.
//! Movement is blocked outside the Playing phase and while temporarily
//! disabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use gloomdelve_engine::game::player::MoveController;
//! use gloomdelve_engine::game::state::PhaseManager;
//! use gloomdelve_engine::input::DirectionInput;
//!
//! let mut phases = PhaseManager::new();
//! let mut input = DirectionInput::new();
//! let mut controller = MoveController::new();
//!
//! controller.set_world(Box::new(world));
//! controller.set_audio(Box::new(sounds));
//! controller.start(&mut phases);
//!
//! // Host forwards key events, then ticks once per simulation frame
//! input.handle_key(KeyCode::W, true);
//! controller.step(delta_seconds, &input);
//! ```

use crate::game::audio::AudioSink;
use crate::game::config::{InputConfig, MIN_MOVE_DELAY_S};
use crate::game::state::{GamePhase, PhaseListener, PhaseManager};
use crate::game::world::DungeonWorld;
use crate::input::{DirectionInput, GridDirection};
use crate::timing::DelayedTrigger;

/// Translates directional input into gated move attempts.
///
/// Collaborators are optional: with no world attached nothing is forwarded,
/// with no audio attached moves are silent, and with no phase subscription
/// the controller assumes Playing.
pub struct MoveController {
    /// Timing and feedback settings
    config: InputConfig,

    // -- Collaborator services --
    world: Option<Box<dyn DungeonWorld>>,
    audio: Option<Box<dyn AudioSink>>,
    phase_events: Option<PhaseListener>,

    // -- Movement gate --
    /// Phase last observed from notifications (or start sync)
    phase: GamePhase,
    /// Cleared by non-playable phases and `disable_movement`
    can_move: bool,
    /// Deferred re-enable for timed disables
    reenable: DelayedTrigger,

    // -- Input state --
    /// Controller clock in seconds, advanced every step
    clock_s: f32,
    /// Clock reading at the last forwarded attempt
    last_move_s: f32,
    /// Direction active on the previous tick
    last_direction: GridDirection,
    /// Seconds the current direction has been continuously held
    key_hold_s: f32,
    /// Whether the repeat-delay threshold has been crossed for this hold
    repeat_active: bool,
}

impl Default for MoveController {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveController {
    /// Create a controller with default tuning and no collaborators.
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create a controller with custom tuning (sanitized on the way in).
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config: config.sanitized(),
            world: None,
            audio: None,
            phase_events: None,
            phase: GamePhase::Playing,
            can_move: true,
            reenable: DelayedTrigger::new(),
            clock_s: 0.0,
            // Far enough in the past that the first attempt is never gated
            last_move_s: f32::NEG_INFINITY,
            last_direction: GridDirection::ZERO,
            key_hold_s: 0.0,
            repeat_active: false,
        }
    }

    /// Attach the world-mutation service.
    pub fn set_world(&mut self, world: Box<dyn DungeonWorld>) {
        self.world = Some(world);
    }

    /// Attach the audio-trigger service.
    pub fn set_audio(&mut self, audio: Box<dyn AudioSink>) {
        self.audio = Some(audio);
    }

    /// Subscribe to phase changes and sync to the manager's current phase.
    pub fn start(&mut self, phases: &mut PhaseManager) {
        self.phase_events = Some(phases.subscribe());
        self.apply_phase(phases.phase());
    }

    /// Drop the phase subscription. The controller keeps its last observed
    /// phase afterwards.
    pub fn dispose(&mut self) {
        self.phase_events = None;
    }

    /// Advance one simulation tick.
    ///
    /// The clock and the deferred re-enable run first, then pending phase
    /// notifications are applied, and only then is input read, so a pause
    /// arriving this tick blocks this tick's input.
    pub fn step(&mut self, dt: f32, input: &DirectionInput) {
        self.clock_s += dt;

        if self.reenable.tick(dt) {
            self.can_move = true;
        }
        self.drain_phase_events();

        if !self.phase.is_playing() || !self.can_move {
            return;
        }

        let mut direction = input.direction();
        if !self.config.allow_diagonal {
            direction = direction.without_diagonal();
        }

        if direction.is_zero() {
            self.reset_input_state();
            return;
        }

        if direction != self.last_direction {
            // Fresh press: bookkeeping happens even if the gate blocks
            self.last_direction = direction;
            self.key_hold_s = 0.0;
            self.repeat_active = false;
            self.try_move(direction);
        } else {
            self.key_hold_s += dt;
            if !self.repeat_active {
                if self.key_hold_s >= self.config.repeat_delay_s {
                    self.repeat_active = true;
                    self.try_move(direction);
                }
            } else if self.key_hold_s >= self.config.repeat_rate_s {
                // The hold timer restarts on the attempt itself, gated or not
                self.key_hold_s = 0.0;
                self.try_move(direction);
            }
        }
    }

    /// Block movement now; optionally re-enable after `duration_s`.
    ///
    /// A positive duration schedules a deferred re-enable, replacing any
    /// pending one. Zero or negative disables indefinitely (until
    /// `enable_movement` or a Playing notification).
    pub fn disable_movement(&mut self, duration_s: f32) {
        self.can_move = false;
        self.reset_input_state();
        if duration_s > 0.0 {
            self.reenable.schedule(duration_s);
        } else {
            self.reenable.cancel();
        }
    }

    /// Allow movement now, cancelling any pending deferred re-enable.
    pub fn enable_movement(&mut self) {
        self.reenable.cancel();
        self.can_move = true;
    }

    /// Toggle diagonal steps at runtime.
    pub fn set_diagonal_movement(&mut self, enabled: bool) {
        self.config.allow_diagonal = enabled;
    }

    /// Set the minimum spacing between forwarded attempts, floored at
    /// [`MIN_MOVE_DELAY_S`].
    pub fn set_move_delay(&mut self, delay_s: f32) {
        self.config.move_delay_s = delay_s.max(MIN_MOVE_DELAY_S);
    }

    /// Whether the disable gate currently allows movement.
    ///
    /// The Playing-phase gate applies on top of this.
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// The phase the controller last observed.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current tuning.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Direction held on the previous tick (zero when idle).
    pub fn last_direction(&self) -> GridDirection {
        self.last_direction
    }

    /// Forward one attempt through the move-delay gate.
    fn try_move(&mut self, direction: GridDirection) {
        if self.clock_s - self.last_move_s < self.config.move_delay_s {
            return;
        }
        if let Some(world) = self.world.as_mut() {
            // The delay window is consumed whether or not the world accepts
            self.last_move_s = self.clock_s;
            let moved = world.attempt_move(direction);
            self.play_feedback(moved);
        }
    }

    /// Request the walk or bump sound, honoring the config toggles.
    fn play_feedback(&mut self, moved: bool) {
        let (enabled, sound_id) = if moved {
            (self.config.walk_sound_enabled, self.config.walk_sound.as_str())
        } else {
            (self.config.bump_sound_enabled, self.config.bump_sound.as_str())
        };
        if !enabled {
            return;
        }
        if let Some(audio) = self.audio.as_mut() {
            audio.play(sound_id);
        }
    }

    /// Apply queued phase notifications in arrival order.
    fn drain_phase_events(&mut self) {
        if let Some(listener) = self.phase_events.take() {
            while let Some(phase) = listener.poll() {
                self.apply_phase(phase);
            }
            self.phase_events = Some(listener);
        }
    }

    /// Playing allows movement; any other phase blocks it and clears hold
    /// state.
    fn apply_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
        if phase.is_playing() {
            self.can_move = true;
        } else {
            self.can_move = false;
            self.reset_input_state();
        }
    }

    /// Back to neutral: no active direction, no hold progress.
    ///
    /// `last_move_s` survives so the delay window keeps gating across
    /// resets.
    fn reset_input_state(&mut self) {
        self.last_direction = GridDirection::ZERO;
        self.key_hold_s = 0.0;
        self.repeat_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::audio::SoundQueue;
    use crate::input::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// World stub that records every forwarded direction.
    struct RecordingWorld {
        accept: bool,
        moves: Vec<GridDirection>,
    }

    impl RecordingWorld {
        fn accepting() -> Self {
            Self {
                accept: true,
                moves: Vec::new(),
            }
        }
    }

    impl DungeonWorld for RecordingWorld {
        fn attempt_move(&mut self, direction: GridDirection) -> bool {
            self.moves.push(direction);
            self.accept
        }
    }

    fn rig() -> (
        MoveController,
        DirectionInput,
        Rc<RefCell<RecordingWorld>>,
        Rc<RefCell<SoundQueue>>,
    ) {
        let world = Rc::new(RefCell::new(RecordingWorld::accepting()));
        let sounds = Rc::new(RefCell::new(SoundQueue::new()));
        let mut controller = MoveController::new();
        controller.set_world(Box::new(world.clone()));
        controller.set_audio(Box::new(sounds.clone()));
        (controller, DirectionInput::new(), world, sounds)
    }

    #[test]
    fn test_new_controller_defaults() {
        let controller = MoveController::new();
        assert!(controller.can_move());
        assert_eq!(controller.phase(), GamePhase::Playing);
        assert!(controller.last_direction().is_zero());
        assert_eq!(controller.config().move_delay_s, 0.2);
    }

    #[test]
    fn test_with_config_sanitizes() {
        let controller = MoveController::with_config(InputConfig {
            move_delay_s: -5.0,
            ..InputConfig::default()
        });
        assert_eq!(controller.config().move_delay_s, MIN_MOVE_DELAY_S);
    }

    #[test]
    fn test_fresh_press_moves_immediately() {
        let (mut controller, mut input, world, sounds) = rig();

        input.handle_key(KeyCode::W, true);
        controller.step(0.016, &input);

        assert_eq!(world.borrow().moves, vec![GridDirection::NORTH]);
        assert_eq!(sounds.borrow_mut().drain_queued(), vec!["walk"]);
    }

    #[test]
    fn test_no_input_no_move() {
        let (mut controller, input, world, _sounds) = rig();

        controller.step(0.016, &input);
        controller.step(0.016, &input);

        assert!(world.borrow().moves.is_empty());
    }

    #[test]
    fn test_blocked_move_plays_bump() {
        let (mut controller, mut input, world, sounds) = rig();
        world.borrow_mut().accept = false;

        input.handle_key(KeyCode::S, true);
        controller.step(0.016, &input);

        assert_eq!(world.borrow().moves, vec![GridDirection::SOUTH]);
        assert_eq!(sounds.borrow_mut().drain_queued(), vec!["bump"]);
    }

    #[test]
    fn test_missing_world_degrades_silently() {
        let sounds = Rc::new(RefCell::new(SoundQueue::new()));
        let mut controller = MoveController::new();
        controller.set_audio(Box::new(sounds.clone()));

        let mut input = DirectionInput::new();
        input.handle_key(KeyCode::W, true);
        controller.step(0.016, &input);

        // Nothing forwarded, nothing played
        assert!(sounds.borrow().is_empty());
    }

    #[test]
    fn test_world_attached_later_is_not_gated() {
        let world = Rc::new(RefCell::new(RecordingWorld::accepting()));
        let mut controller = MoveController::new();
        let mut input = DirectionInput::new();

        input.handle_key(KeyCode::W, true);
        // Skipped attempts while no world is attached record no move time
        controller.step(0.016, &input);
        controller.set_world(Box::new(world.clone()));

        // A release makes the next press fresh again
        input.handle_key(KeyCode::W, false);
        controller.step(0.016, &input);
        input.handle_key(KeyCode::W, true);
        controller.step(0.016, &input);

        assert_eq!(world.borrow().moves, vec![GridDirection::NORTH]);
    }

    #[test]
    fn test_disable_blocks_and_enable_restores() {
        let (mut controller, mut input, world, _sounds) = rig();
        input.handle_key(KeyCode::D, true);

        controller.disable_movement(0.0);
        assert!(!controller.can_move());
        controller.step(0.016, &input);
        assert!(world.borrow().moves.is_empty());

        controller.enable_movement();
        assert!(controller.can_move());
        controller.step(0.016, &input);
        assert_eq!(world.borrow().moves, vec![GridDirection::EAST]);
    }

    #[test]
    fn test_timed_disable_reenables() {
        let (mut controller, mut input, world, _sounds) = rig();
        input.handle_key(KeyCode::W, true);

        controller.disable_movement(0.5);
        controller.step(0.3, &input);
        assert!(!controller.can_move());
        assert!(world.borrow().moves.is_empty());

        // Trigger fires during this step and input is read the same tick
        controller.step(0.3, &input);
        assert!(controller.can_move());
        assert_eq!(world.borrow().moves, vec![GridDirection::NORTH]);
    }

    #[test]
    fn test_disable_resets_hold_state() {
        let (mut controller, mut input, _world, _sounds) = rig();
        input.handle_key(KeyCode::W, true);
        controller.step(0.016, &input);
        assert_eq!(controller.last_direction(), GridDirection::NORTH);

        controller.disable_movement(1.0);
        assert!(controller.last_direction().is_zero());
    }

    #[test]
    fn test_set_move_delay_clamps_to_floor() {
        let mut controller = MoveController::new();

        controller.set_move_delay(0.0);
        assert_eq!(controller.config().move_delay_s, MIN_MOVE_DELAY_S);

        controller.set_move_delay(0.75);
        assert_eq!(controller.config().move_delay_s, 0.75);
    }

    #[test]
    fn test_diagonal_disabled_vertical_wins() {
        let (mut controller, mut input, world, _sounds) = rig();
        controller.set_diagonal_movement(false);

        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::D, true);
        controller.step(0.016, &input);

        assert_eq!(world.borrow().moves, vec![GridDirection::NORTH]);
    }

    #[test]
    fn test_diagonal_enabled_passes_through() {
        let (mut controller, mut input, world, _sounds) = rig();

        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::D, true);
        controller.step(0.016, &input);

        assert_eq!(world.borrow().moves, vec![GridDirection::NORTH_EAST]);
    }

    #[test]
    fn test_phase_pause_blocks_input() {
        let (mut controller, mut input, world, _sounds) = rig();
        let mut phases = PhaseManager::new();
        controller.start(&mut phases);

        input.handle_key(KeyCode::W, true);
        controller.step(0.016, &input);
        assert_eq!(world.borrow().moves.len(), 1);

        phases.set_phase(GamePhase::Paused);
        controller.step(0.016, &input);
        controller.step(0.016, &input);
        assert_eq!(world.borrow().moves.len(), 1);
        assert!(!controller.can_move());
        assert_eq!(controller.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_start_syncs_to_current_phase() {
        let mut phases = PhaseManager::new();
        phases.set_phase(GamePhase::Settings);

        let mut controller = MoveController::new();
        controller.start(&mut phases);

        assert!(!controller.can_move());
        assert_eq!(controller.phase(), GamePhase::Settings);
    }

    #[test]
    fn test_dispose_unsubscribes() {
        let mut phases = PhaseManager::new();
        let mut controller = MoveController::new();
        controller.start(&mut phases);
        assert_eq!(phases.listener_count(), 1);

        controller.dispose();
        assert_eq!(phases.listener_count(), 0);

        // Later transitions are no longer observed
        phases.set_phase(GamePhase::GameOver);
        let input = DirectionInput::new();
        controller.step(0.016, &input);
        assert_eq!(controller.phase(), GamePhase::Playing);
    }
}
