//! Keyboard input handling

use game_core::{InputState, Key};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to a game key
pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Forward a winit key event into the held-key state
pub fn handle_key_event(input: &mut InputState, event: &KeyEvent) {
    if let PhysicalKey::Code(key_code) = event.physical_key {
        if let Some(key) = map_key(key_code) {
            match event.state {
                ElementState::Pressed => input.key_down(key),
                ElementState::Released => input.key_up(key),
            }
        }
    }
}

/// Drop held keys when the window loses focus, since their releases
/// go to another window
pub fn handle_focus_change(input: &mut InputState, focused: bool) {
    if !focused {
        log::debug!("Focus lost, releasing held keys");
        input.clear();
    }
}
