//! Crypt Crawl Demo
//!
//! Run with: `cargo run --bin crypt-crawl`
//!
//! A scripted walkthrough of the grid movement system: a small crypt map,
//! a keyboard script played back at a fixed 60 Hz tick, and a log of every
//! step, bump, and phase change. No window is opened; the demo drives the
//! engine exactly the way an interactive host would.
//!
//! Script highlights:
//! - Tap and hold movement (key repeat after the hold threshold)
//! - Walking into walls (bump feedback, the move delay is still consumed)
//! - Pausing mid-hold and resuming
//! - Temporary movement disable with a deferred re-enable
//! - Numpad diagonals, and the vertical-wins rule with diagonals off

use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;
use gloomdelve_engine::game::{GamePhase, MoveController, PhaseManager, SoundQueue};
use gloomdelve_engine::game::world::DungeonWorld;
use gloomdelve_engine::input::{DirectionInput, GridDirection, KeyCode};

/// Simulation tick length (60 Hz)
const TICK_S: f32 = 1.0 / 60.0;
/// Total scripted ticks (about five seconds)
const TOTAL_TICKS: u32 = 320;

// ============================================================================
// MAP
// ============================================================================

/// Crypt layout, top row first. `#` is wall, `.` is floor.
const MAP_ROWS: [&str; 7] = [
    "#########",
    "#.......#",
    "#.##....#",
    "#....##.#",
    "#.......#",
    "#.......#",
    "#########",
];

/// Tile map with a single player marker. North is up (+y).
struct CryptMap {
    player: IVec2,
}

impl CryptMap {
    fn new() -> Self {
        Self {
            player: IVec2::new(3, 2),
        }
    }

    /// Tile at a grid position; everything outside the map reads as wall.
    fn tile(&self, pos: IVec2) -> char {
        let height = MAP_ROWS.len() as i32;
        let width = MAP_ROWS[0].len() as i32;
        if pos.x < 0 || pos.y < 0 || pos.x >= width || pos.y >= height {
            return '#';
        }
        let row = (height - 1 - pos.y) as usize;
        MAP_ROWS[row].as_bytes()[pos.x as usize] as char
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (row_index, row) in MAP_ROWS.iter().enumerate() {
            let y = MAP_ROWS.len() as i32 - 1 - row_index as i32;
            for (x, tile) in row.chars().enumerate() {
                if self.player == IVec2::new(x as i32, y) {
                    out.push('@');
                } else {
                    out.push(tile);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl DungeonWorld for CryptMap {
    fn attempt_move(&mut self, direction: GridDirection) -> bool {
        let target = self.player + direction.delta();
        if self.tile(target) == '#' {
            return false;
        }
        self.player = target;
        true
    }
}

// ============================================================================
// SCRIPT
// ============================================================================

#[derive(Clone, Copy)]
enum ScriptAction {
    /// Press (true) or release (false) a key
    Key(KeyCode, bool),
    /// Switch the game phase
    Phase(GamePhase),
    /// Disable movement, re-enabling after the given seconds (0 = indefinite)
    Disable(f32),
    /// Re-enable movement, cancelling any pending re-enable
    Enable,
    /// Toggle diagonal movement
    Diagonal(bool),
    /// Narration line
    Note(&'static str),
}

/// Keyboard and control timeline, keyed by tick number.
const SCRIPT: &[(u32, ScriptAction)] = &[
    (5, ScriptAction::Note("tap east")),
    (5, ScriptAction::Key(KeyCode::D, true)),
    (8, ScriptAction::Key(KeyCode::D, false)),
    (30, ScriptAction::Note("hold north until the wall answers")),
    (30, ScriptAction::Key(KeyCode::W, true)),
    (95, ScriptAction::Key(KeyCode::W, false)),
    (110, ScriptAction::Note("sidestep west")),
    (110, ScriptAction::Key(KeyCode::A, true)),
    (113, ScriptAction::Key(KeyCode::A, false)),
    (120, ScriptAction::Note("pause, keep pressing south")),
    (120, ScriptAction::Phase(GamePhase::Paused)),
    (125, ScriptAction::Key(KeyCode::S, true)),
    (150, ScriptAction::Note("resume; the held key counts as a fresh press")),
    (150, ScriptAction::Phase(GamePhase::Playing)),
    (165, ScriptAction::Key(KeyCode::S, false)),
    (180, ScriptAction::Note("stunned for half a second")),
    (180, ScriptAction::Disable(0.5)),
    (185, ScriptAction::Key(KeyCode::D, true)),
    (235, ScriptAction::Key(KeyCode::D, false)),
    (250, ScriptAction::Note("caught in a trap")),
    (250, ScriptAction::Disable(5.0)),
    (260, ScriptAction::Note("trap disarmed early")),
    (260, ScriptAction::Enable),
    (265, ScriptAction::Note("numpad diagonal, southeast")),
    (265, ScriptAction::Key(KeyCode::Numpad3, true)),
    (268, ScriptAction::Key(KeyCode::Numpad3, false)),
    (280, ScriptAction::Note("diagonals off: north plus east walks north")),
    (280, ScriptAction::Diagonal(false)),
    (282, ScriptAction::Key(KeyCode::W, true)),
    (282, ScriptAction::Key(KeyCode::D, true)),
    (290, ScriptAction::Key(KeyCode::W, false)),
    (290, ScriptAction::Key(KeyCode::D, false)),
];

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    println!("=== Crypt Crawl ===");
    println!();

    let map = Rc::new(RefCell::new(CryptMap::new()));
    let sounds = Rc::new(RefCell::new(SoundQueue::new()));
    let mut phases = PhaseManager::new();
    let mut input = DirectionInput::new();

    let mut controller = MoveController::new();
    controller.set_world(Box::new(map.clone()));
    controller.set_audio(Box::new(sounds.clone()));
    controller.start(&mut phases);

    print!("{}", map.borrow().render());
    println!();

    let mut cursor = 0;
    for tick in 0..TOTAL_TICKS {
        let now = (tick + 1) as f32 * TICK_S;

        while cursor < SCRIPT.len() && SCRIPT[cursor].0 == tick {
            match SCRIPT[cursor].1 {
                ScriptAction::Key(key, pressed) => {
                    input.handle_key(key, pressed);
                }
                ScriptAction::Phase(phase) => {
                    phases.set_phase(phase);
                    println!("[{:5.2}s] phase -> {:?}", now, phase);
                }
                ScriptAction::Disable(duration_s) => {
                    controller.disable_movement(duration_s);
                    println!("[{:5.2}s] movement disabled ({}s)", now, duration_s);
                }
                ScriptAction::Enable => {
                    controller.enable_movement();
                    println!("[{:5.2}s] movement enabled", now);
                }
                ScriptAction::Diagonal(enabled) => {
                    controller.set_diagonal_movement(enabled);
                    println!("[{:5.2}s] diagonal movement: {}", now, enabled);
                }
                ScriptAction::Note(text) => {
                    println!("[{:5.2}s] -- {}", now, text);
                }
            }
            cursor += 1;
        }

        let before = map.borrow().player;
        controller.step(TICK_S, &input);
        let after = map.borrow().player;

        for sound in sounds.borrow_mut().drain_queued() {
            println!("[{:5.2}s] sound: {}", now, sound);
        }
        if after != before {
            println!("[{:5.2}s] step to ({}, {})", now, after.x, after.y);
        }
    }

    println!();
    print!("{}", map.borrow().render());
    let end = map.borrow().player;
    println!("Final position: ({}, {})", end.x, end.y);
}
