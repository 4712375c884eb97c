// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::{InputConfigManager, GLOBAL_PLAYER_ID};
use super::intent::Intent;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Number of local players sharing the keyboard
pub const PLAYER_COUNT: usize = 2;

/// Main input manager that coordinates all input for both players
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Input state for game-wide actions (restart, pause, ...)
    global: PlayerInput,
}

impl InputManager {
    /// Create a new input manager with default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfigManager::new(PLAYER_COUNT))
    }

    /// Create an input manager from an existing configuration
    pub fn with_config(config: InputConfigManager) -> Self {
        Self {
            config,
            players: (0..PLAYER_COUNT).map(PlayerInput::new).collect(),
            global: PlayerInput::new(GLOBAL_PLAYER_ID),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(
                key_code,
                event.state == ElementState::Pressed,
                event.repeat,
            );
        }
    }

    /// Route one key transition to every player (and the global table) bound to it
    pub fn process_key(&mut self, key_code: KeyCode, pressed: bool, repeat: bool) {
        // Held state is already recorded on the first press
        if pressed && repeat {
            return;
        }

        let source = InputSource::key(key_code);

        for player in &mut self.players {
            if let Some(action) = self.config.get_player_action(player.player_id(), source) {
                if pressed {
                    player.press(action);
                } else {
                    player.release(action);
                }
            }
        }

        if let Some(action) = self.config.global_config().get_action(source) {
            if pressed {
                self.global.press(action);
            } else {
                self.global.release(action);
            }
        }
    }

    /// Update all input states for a new frame
    /// Call this once per frame after the frame's intents were consumed
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
        self.global.update();
    }

    /// Get input state for a specific player
    #[cfg(test)]
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Current intents for player 1 and player 2
    pub fn intents(&self) -> [Intent; PLAYER_COUNT] {
        [self.players[0].intent(), self.players[1].intent()]
    }

    /// Check if a game-wide action was pressed this frame
    pub fn global_just_pressed(&self, action: Action) -> bool {
        self.global.just_pressed(action)
    }

    /// Get the configuration manager
    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    /// Get mutable configuration manager
    #[cfg(test)]
    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    /// Reset all input states (e.g. when the window loses focus)
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.global.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
