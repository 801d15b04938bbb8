use log::warn;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

const NUM_KEYS: usize = 194;

pub struct Input {
    key_states: [KeyState; NUM_KEYS],
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum KeyState {
    Released,
    Pressed,
    Repeat,
    JustReleased,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            key_states: [KeyState::Released; NUM_KEYS],
        }
    }

    pub fn key_pressed(&self, key_code: KeyCode) -> bool {
        self.state(key_code) == KeyState::Pressed
    }

    pub fn key_released(&self, key_code: KeyCode) -> bool {
        self.state(key_code) == KeyState::Released
    }

    pub fn key_down(&self, key_code: KeyCode) -> bool {
        let state = self.state(key_code);
        state == KeyState::Pressed || state == KeyState::Repeat
    }

    pub fn key_just_released(&self, key_code: KeyCode) -> bool {
        self.state(key_code) == KeyState::JustReleased
    }

    /// Must be called once at the end of every frame.
    pub fn reset_internal_state(&mut self) {
        for key_state in self.key_states.iter_mut() {
            if *key_state == KeyState::JustReleased {
                *key_state = KeyState::Released;
            }
        }
    }

    pub fn process_window_event(&mut self, window_event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = window_event {
            self.process_key_event(event);
        }
    }

    fn process_key_event(&mut self, key_event: &KeyEvent) {
        match key_event.physical_key {
            PhysicalKey::Code(key_code) => self.update_key(key_code, key_event.state),
            PhysicalKey::Unidentified(native_key_code) => {
                let (platform, code) = match native_key_code {
                    NativeKeyCode::Windows(code) => ("Windows", code as u32),
                    NativeKeyCode::MacOS(code) => ("MacOS", code as u32),
                    NativeKeyCode::Android(code) => ("Android", code),
                    NativeKeyCode::Xkb(code) => ("XKB", code),
                    NativeKeyCode::Unidentified => return warn!("Unidentified key event received"),
                };

                warn!("Unidentified {} key event {}", platform, code)
            }
        }
    }

    fn update_key(&mut self, key_code: KeyCode, state: ElementState) {
        match self.key_states.get_mut(key_code as usize) {
            Some(key_state) => *key_state = Self::next_key_state(*key_state, state),
            None => warn!("Key {:?} is outside the tracked range", key_code),
        }
    }

    fn state(&self, key_code: KeyCode) -> KeyState {
        self.key_states
            .get(key_code as usize)
            .copied()
            .unwrap_or(KeyState::Released)
    }

    fn next_key_state(old_state: KeyState, state: ElementState) -> KeyState {
        match state {
            ElementState::Pressed => {
                if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                    KeyState::Repeat
                } else {
                    KeyState::Pressed
                }
            }
            ElementState::Released => {
                if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                    KeyState::JustReleased
                } else {
                    KeyState::Released
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_key_released() {
        let input = Input::new();

        assert!(input.key_released(KeyCode::Escape));
        assert!(!input.key_down(KeyCode::Escape));
        assert!(!input.key_pressed(KeyCode::ArrowUp));
    }

    #[test]
    fn press_then_hold_becomes_repeat() {
        let mut input = Input::new();

        input.update_key(KeyCode::Escape, ElementState::Pressed);
        assert!(input.key_pressed(KeyCode::Escape));
        assert!(input.key_down(KeyCode::Escape));

        input.update_key(KeyCode::Escape, ElementState::Pressed);
        assert!(!input.key_pressed(KeyCode::Escape));
        assert!(input.key_down(KeyCode::Escape));
    }

    #[test]
    fn release_is_visible_for_one_frame() {
        let mut input = Input::new();

        input.update_key(KeyCode::ArrowDown, ElementState::Pressed);
        input.update_key(KeyCode::ArrowDown, ElementState::Released);
        assert!(input.key_just_released(KeyCode::ArrowDown));
        assert!(!input.key_down(KeyCode::ArrowDown));

        input.reset_internal_state();
        assert!(input.key_released(KeyCode::ArrowDown));
    }

    #[test]
    fn release_without_press_stays_released() {
        assert_eq!(
            Input::next_key_state(KeyState::Released, ElementState::Released),
            KeyState::Released
        );
        assert_eq!(
            Input::next_key_state(KeyState::JustReleased, ElementState::Pressed),
            KeyState::Pressed
        );
    }

    #[test]
    fn reset_keeps_held_keys_down() {
        let mut input = Input::new();

        input.update_key(KeyCode::ArrowUp, ElementState::Pressed);
        input.reset_internal_state();

        assert!(input.key_down(KeyCode::ArrowUp));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut input = Input::new();

        input.update_key(KeyCode::ArrowUp, ElementState::Pressed);

        assert!(input.key_down(KeyCode::ArrowUp));
        assert!(input.key_released(KeyCode::ArrowDown));
        assert!(input.key_released(KeyCode::Escape));
    }
}
