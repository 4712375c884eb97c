// Input handling system
//
// Turns keyboard events into one `Intent` per player per frame. Two players
// share the keyboard; game-wide keys (restart, pause, help, quit) live in a
// separate global table.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `intent`: The per-tick record a fighter consumes
// - `player`: Per-player held and just-pressed state
// - `config`: Input configuration and remapping system. `BRAWL_BINDINGS`
//   overrides such as `p1.punch=F,p2.block=Semicolon` go through
//   `parse_overrides` and `InputConfigManager::apply_overrides`.
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputManager};
//
// let mut input_manager = InputManager::new();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per frame, sample intents and feed them to the match
// let intents = input_manager.intents();
// brawl.tick(dt, intents);
//
// if input_manager.global_just_pressed(Action::Restart) {
//     brawl.request_restart();
// }
//
// // At the end of each frame, roll the input state over
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod intent;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use config::{parse_overrides, InputConfig, InputConfigManager};
pub use intent::Intent;
pub use manager::{InputManager, PLAYER_COUNT};
