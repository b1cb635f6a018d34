//! Keyboard Input Module
//!
//! Generic key codes for grid movement input.
//! Decoupled from winit to use generic key codes; hosts feed window events
//! through the `From<winit::keyboard::KeyCode>` bridge.

use serde::{Deserialize, Serialize};

/// Generic key codes for movement input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement letters
    W,
    A,
    S,
    D,

    // Vi-style movement letters (rebind targets)
    H,
    J,
    K,
    L,
    Y,
    U,
    B,
    N,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,

    // Control keys
    Space,
    Escape,
    Enter,
    Tab,
    ShiftLeft,
    ShiftRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Wk;

        match key {
            Wk::KeyW => KeyCode::W,
            Wk::KeyA => KeyCode::A,
            Wk::KeyS => KeyCode::S,
            Wk::KeyD => KeyCode::D,
            Wk::KeyH => KeyCode::H,
            Wk::KeyJ => KeyCode::J,
            Wk::KeyK => KeyCode::K,
            Wk::KeyL => KeyCode::L,
            Wk::KeyY => KeyCode::Y,
            Wk::KeyU => KeyCode::U,
            Wk::KeyB => KeyCode::B,
            Wk::KeyN => KeyCode::N,
            Wk::ArrowUp => KeyCode::ArrowUp,
            Wk::ArrowDown => KeyCode::ArrowDown,
            Wk::ArrowLeft => KeyCode::ArrowLeft,
            Wk::ArrowRight => KeyCode::ArrowRight,
            Wk::Numpad0 => KeyCode::Numpad0,
            Wk::Numpad1 => KeyCode::Numpad1,
            Wk::Numpad2 => KeyCode::Numpad2,
            Wk::Numpad3 => KeyCode::Numpad3,
            Wk::Numpad4 => KeyCode::Numpad4,
            Wk::Numpad5 => KeyCode::Numpad5,
            Wk::Numpad6 => KeyCode::Numpad6,
            Wk::Numpad7 => KeyCode::Numpad7,
            Wk::Numpad8 => KeyCode::Numpad8,
            Wk::Numpad9 => KeyCode::Numpad9,
            Wk::Space => KeyCode::Space,
            Wk::Escape => KeyCode::Escape,
            Wk::Enter => KeyCode::Enter,
            Wk::Tab => KeyCode::Tab,
            Wk::ShiftLeft => KeyCode::ShiftLeft,
            Wk::ShiftRight => KeyCode::ShiftRight,
            _ => KeyCode::Unknown,
        }
    }
}
