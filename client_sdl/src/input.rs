//! Keyboard input handling

use sdl2::keyboard::Keycode;

/// Direction for a key press: W/Up move up, S/Down move down
pub fn dir_for_key_down(key: Keycode) -> Option<i8> {
    match key {
        Keycode::W | Keycode::Up => Some(-1),
        Keycode::S | Keycode::Down => Some(1),
        _ => None,
    }
}

/// Direction for a key release: either movement key stops the paddle
pub fn dir_for_key_up(key: Keycode) -> Option<i8> {
    match key {
        Keycode::W | Keycode::Up | Keycode::S | Keycode::Down => Some(0),
        _ => None,
    }
}
