// Per-tick intent record handed to a fighter

/// What one player wants their fighter to do this tick
///
/// Sampled fresh every frame from held keys (level-triggered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub punch: bool,
    pub block: bool,
    pub down: bool,
}

impl Intent {
    /// Horizontal direction: -1 left, 1 right, 0 neither (left wins ties)
    pub fn horizontal(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
impl Intent {
    /// No input at all
    pub const IDLE: Intent = Intent {
        left: false,
        right: false,
        jump: false,
        punch: false,
        block: false,
        down: false,
    };

    pub const fn idle() -> Self {
        Self::IDLE
    }

    pub const fn left() -> Self {
        Self {
            left: true,
            ..Self::IDLE
        }
    }

    pub const fn right() -> Self {
        Self {
            right: true,
            ..Self::IDLE
        }
    }

    pub const fn jump() -> Self {
        Self {
            jump: true,
            ..Self::IDLE
        }
    }

    pub const fn punch() -> Self {
        Self {
            punch: true,
            ..Self::IDLE
        }
    }

    pub const fn block() -> Self {
        Self {
            block: true,
            ..Self::IDLE
        }
    }

    pub const fn down() -> Self {
        Self {
            down: true,
            ..Self::IDLE
        }
    }
}
