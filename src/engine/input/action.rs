// Game action definitions and mappings

use std::str::FromStr;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Down,

    // Combat
    Punch,
    Block,

    // Meta actions
    Restart,
    ToggleControls,
    Pause,
    Quit,
}

impl Action {
    /// Every action a fighter can be bound to, in display order
    pub const FIGHTER_ACTIONS: [Action; 6] = [
        Self::MoveLeft,
        Self::MoveRight,
        Self::Jump,
        Self::Down,
        Self::Punch,
        Self::Block,
    ];

}

/// Fighter action names accepted in binding overrides
impl FromStr for Action {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::MoveLeft),
            "right" => Ok(Self::MoveRight),
            "jump" => Ok(Self::Jump),
            "down" => Ok(Self::Down),
            "punch" => Ok(Self::Punch),
            "block" => Ok(Self::Block),
            _ => Err(()),
        }
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: Add controller support
    // GamepadButton(gilrs::Button),
}

const LETTER_KEYS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGIT_KEYS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Look up a keyboard source by name: a single letter or digit, or a
    /// winit key name such as `KeyF`, `ArrowUp` or `Semicolon`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            let c = c.to_ascii_uppercase();
            return match c {
                'A'..='Z' => Some(Self::key(LETTER_KEYS[(c as u8 - b'A') as usize])),
                '0'..='9' => Some(Self::key(DIGIT_KEYS[(c as u8 - b'0') as usize])),
                _ => None,
            };
        }
        if let Some(rest) = name.strip_prefix("Key") {
            return match rest.as_bytes() {
                [c] if c.is_ascii_uppercase() => Self::from_name(rest),
                _ => None,
            };
        }
        if let Some(rest) = name.strip_prefix("Digit") {
            return match rest.as_bytes() {
                [c] if c.is_ascii_digit() => Self::from_name(rest),
                _ => None,
            };
        }
        let code = match name {
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "Tab" => KeyCode::Tab,
            "Comma" => KeyCode::Comma,
            "Period" => KeyCode::Period,
            "Slash" => KeyCode::Slash,
            "Semicolon" => KeyCode::Semicolon,
            "Quote" => KeyCode::Quote,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ShiftRight" => KeyCode::ShiftRight,
            "ControlLeft" => KeyCode::ControlLeft,
            "ControlRight" => KeyCode::ControlRight,
            _ => return None,
        };
        Some(Self::key(code))
    }
}

/// Default keyboard bindings for Player 1 (left side of the keyboard)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyS), Action::Down),
        (InputSource::key(KeyCode::KeyV), Action::Punch),
        (InputSource::key(KeyCode::KeyB), Action::Block),
    ]
}

/// Default keyboard bindings for Player 2 (arrows plus K/L)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::ArrowDown), Action::Down),
        (InputSource::key(KeyCode::KeyK), Action::Punch),
        (InputSource::key(KeyCode::KeyL), Action::Block),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyR), Action::Restart),
        (InputSource::key(KeyCode::KeyH), Action::ToggleControls),
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Down);
    }

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_fighter_actions() {
        assert!(Action::FIGHTER_ACTIONS.contains(&Action::Punch));
        assert!(Action::FIGHTER_ACTIONS.contains(&Action::Down));
        assert!(!Action::FIGHTER_ACTIONS.contains(&Action::Restart));
        assert!(!Action::FIGHTER_ACTIONS.contains(&Action::Quit));
    }

    #[test]
    fn test_player_bindings_cover_every_fighter_action() {
        for bindings in [default_p1_bindings(), default_p2_bindings()] {
            for action in Action::FIGHTER_ACTIONS {
                assert!(bindings.iter().any(|(_, a)| *a == action));
            }
        }
    }

    #[test]
    fn test_player_bindings_do_not_overlap() {
        let p1 = default_p1_bindings();
        let p2 = default_p2_bindings();
        let globals = global_bindings();

        for (source, _) in &p1 {
            assert!(!p2.iter().any(|(s, _)| s == source));
            assert!(!globals.iter().any(|(s, _)| s == source));
        }
        for (source, _) in &p2 {
            assert!(!globals.iter().any(|(s, _)| s == source));
        }
    }

    #[test]
    fn test_action_names() {
        assert_eq!("punch".parse::<Action>(), Ok(Action::Punch));
        assert_eq!("Left".parse::<Action>(), Ok(Action::MoveLeft));
        assert_eq!("restart".parse::<Action>(), Err(()));
    }

    #[test]
    fn test_source_from_name() {
        assert_eq!(
            InputSource::from_name("f"),
            Some(InputSource::key(KeyCode::KeyF))
        );
        assert_eq!(
            InputSource::from_name("KeyF"),
            Some(InputSource::key(KeyCode::KeyF))
        );
        assert_eq!(
            InputSource::from_name("Digit7"),
            Some(InputSource::key(KeyCode::Digit7))
        );
        assert_eq!(
            InputSource::from_name("Semicolon"),
            Some(InputSource::key(KeyCode::Semicolon))
        );
        assert_eq!(InputSource::from_name("Digitq"), None);
        assert_eq!(InputSource::from_name("KeyAB"), None);
        assert_eq!(InputSource::from_name("Banana"), None);
    }

    #[test]
    fn test_restart_is_global() {
        let bindings = global_bindings();
        assert!(bindings
            .iter()
            .any(|(s, a)| *s == InputSource::key(KeyCode::KeyR) && *a == Action::Restart));
    }
}
