//! Keyboard handling.
//!
//! Events the GUI consumed never get here; everything else maps onto a
//! small set of actions. Press only, repeats ignored, and character binds
//! fire on the plain key only — chords like Ctrl+W stay unbound.

use winit::event::KeyEvent;
use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::state::Easel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleProperties,
    ToggleWireframe,
}

/// Map a logical key to an action. `None` for releases, repeats, chorded
/// characters, and unbound keys.
pub fn action_for_key(
    key: &Key,
    mods: ModifiersState,
    pressed: bool,
    repeat: bool,
) -> Option<Action> {
    if !pressed || repeat {
        return None;
    }

    match key {
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Named(NamedKey::F1) => Some(Action::ToggleProperties),
        // Shift is fine (it is what produces the uppercase character);
        // anything else chording the key is not ours.
        Key::Character(c)
            if c.eq_ignore_ascii_case("w")
                && !mods.control_key()
                && !mods.alt_key()
                && !mods.super_key() =>
        {
            Some(Action::ToggleWireframe)
        }
        _ => None,
    }
}

impl Easel {
    /// Apply a keyboard event. Returns true when it mapped to an action.
    pub fn handle_key(&mut self, event: &KeyEvent, mods: ModifiersState) -> bool {
        let Some(action) = action_for_key(
            &event.logical_key,
            mods,
            event.state.is_pressed(),
            event.repeat,
        ) else {
            return false;
        };

        match action {
            Action::Quit => self.request_quit(),
            Action::ToggleProperties => self.toggle_properties(),
            Action::ToggleWireframe => self.toggle_wireframe(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ModifiersState {
        ModifiersState::empty()
    }

    #[test]
    fn test_escape_quits() {
        let key = Key::Named(NamedKey::Escape);
        assert_eq!(action_for_key(&key, plain(), true, false), Some(Action::Quit));
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let key = Key::Named(NamedKey::Escape);
        assert_eq!(action_for_key(&key, plain(), false, false), None);
        assert_eq!(action_for_key(&key, plain(), true, true), None);
    }

    #[test]
    fn test_panel_and_wireframe_binds() {
        assert_eq!(
            action_for_key(&Key::Named(NamedKey::F1), plain(), true, false),
            Some(Action::ToggleProperties)
        );
        assert_eq!(
            action_for_key(&Key::Character("w".into()), plain(), true, false),
            Some(Action::ToggleWireframe)
        );
        assert_eq!(
            action_for_key(&Key::Character("W".into()), plain(), true, false),
            Some(Action::ToggleWireframe)
        );
    }

    #[test]
    fn test_chorded_w_stays_unbound() {
        let key = Key::Character("w".into());
        assert_eq!(action_for_key(&key, ModifiersState::CONTROL, true, false), None);
        assert_eq!(action_for_key(&key, ModifiersState::ALT, true, false), None);
        assert_eq!(action_for_key(&key, ModifiersState::SUPER, true, false), None);

        // shift only produces the uppercase character, it is not a chord
        assert_eq!(
            action_for_key(&Key::Character("W".into()), ModifiersState::SHIFT, true, false),
            Some(Action::ToggleWireframe)
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(action_for_key(&Key::Character("q".into()), plain(), true, false), None);
        assert_eq!(action_for_key(&Key::Named(NamedKey::Space), plain(), true, false), None);
    }
}
