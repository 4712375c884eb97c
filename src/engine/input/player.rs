// Per-player input state management

use super::action::Action;
use super::intent::Intent;
use std::collections::HashSet;

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Player index (0 for player 1, 1 for player 2)
    player_id: usize,

    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Get the player index
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Update input state for a new frame
    /// Call this once per frame after the simulation consumed the intent
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Level-triggered intent from the currently held actions
    pub fn intent(&self) -> Intent {
        Intent {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump: self.is_pressed(Action::Jump),
            punch: self.is_pressed(Action::Punch),
            block: self.is_pressed(Action::Block),
            down: self.is_pressed(Action::Down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_input_creation() {
        let input = PlayerInput::new(0);
        assert_eq!(input.player_id(), 0);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.intent().jump);
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Punch);
        input.update();
        assert!(input.is_pressed(Action::Punch));
        assert!(!input.just_pressed(Action::Punch));
    }

    #[test]
    fn test_repeated_press_is_not_a_new_press() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Block);
        input.update();
        input.press(Action::Block);
        assert!(input.is_pressed(Action::Block));
        assert!(!input.just_pressed(Action::Block));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new(0);
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input.intent(), Intent::default());
    }

    #[test]
    fn test_intent_is_level_triggered() {
        let mut input = PlayerInput::new(1);
        input.press(Action::MoveRight);
        input.press(Action::Block);

        let first = input.intent();
        input.update();
        let second = input.intent();

        assert_eq!(first, second);
        assert!(second.right);
        assert!(second.block);
        assert!(!second.punch);
    }

    #[test]
    fn test_intent_after_release() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Punch);
        input.press(Action::Down);
        input.release(Action::Punch);

        let intent = input.intent();
        assert!(!intent.punch);
        assert!(intent.down);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new(0);
        input.press(Action::Jump);
        input.press(Action::Punch);
        input.reset();

        assert_eq!(input.intent(), Intent::default());
    }
}
