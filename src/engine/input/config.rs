// Input configuration and remapping system

use super::action::{Action, InputSource};
use std::collections::HashMap;

/// Player id used for the global (not player-specific) configuration
pub const GLOBAL_PLAYER_ID: usize = usize::MAX;

/// Input binding errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(usize),

    #[error("Invalid binding: {0:?} (expected p<N>.<action>=<key>)")]
    InvalidBinding(String),

    #[error("{key:?} is already bound to {action:?} for player {owner}")]
    SourceTaken {
        key: InputSource,
        action: Action,
        owner: usize,
    },
}

/// One rebinding request: `player_id`'s `action` moves to `source`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingOverride {
    pub player_id: usize,
    pub action: Action,
    pub source: InputSource,
}

/// Parse a comma separated override list such as `p1.punch=F,p2.block=Semicolon`
pub fn parse_overrides(text: &str) -> Result<Vec<BindingOverride>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<BindingOverride, InputError> {
            let invalid = || InputError::InvalidBinding(entry.to_string());
            let (target, key) = entry.split_once('=').ok_or_else(invalid)?;
            let (player, action) = target.trim().split_once('.').ok_or_else(invalid)?;
            let number: usize = player
                .strip_prefix('p')
                .or_else(|| player.strip_prefix('P'))
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .ok_or_else(invalid)?;
            Ok(BindingOverride {
                player_id: number - 1,
                action: action.trim().parse::<Action>().map_err(|_| invalid())?,
                source: InputSource::from_name(key).ok_or_else(invalid)?,
            })
        })
        .collect()
}

/// Input configuration for a single player
/// Maps input sources (keys) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player ID this config is for
    player_id: usize,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping for quick lookups (action -> all sources)
    action_to_sources: HashMap<Action, Vec<InputSource>>,
}

impl InputConfig {
    /// Create a new input configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_id: usize, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new(player_id);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Get the player ID
    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind an input source to an action, replacing whatever it was bound to
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);
        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(sources) = self.action_to_sources.remove(&action) {
            for source in sources {
                self.bindings.remove(&source);
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an input source is bound to any action
    #[cfg(test)]
    pub fn is_bound(&self, source: InputSource) -> bool {
        self.bindings.contains_key(&source)
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Get all bindings as a list
    pub fn get_all_bindings(&self) -> Vec<(InputSource, Action)> {
        self.bindings.iter().map(|(s, a)| (*s, *a)).collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Reset to default bindings for this player
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        let defaults = match self.player_id {
            0 => super::action::default_p1_bindings(),
            1 => super::action::default_p2_bindings(),
            GLOBAL_PLAYER_ID => super::action::global_bindings(),
            _ => Vec::new(),
        };
        for (source, action) in defaults {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Manager for all player input configurations
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Create a new config manager with default configurations
    pub fn new(max_players: usize) -> Self {
        let configs = (0..max_players)
            .map(|player_id| {
                let mut config = InputConfig::new(player_id);
                config.reset_to_defaults();
                config
            })
            .collect();

        let global_config =
            InputConfig::from_bindings(GLOBAL_PLAYER_ID, super::action::global_bindings());

        Self {
            configs,
            global_config,
        }
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Get a mutable reference to a player's configuration
    #[cfg(test)]
    pub fn get_config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_id)
    }

    /// Get the global configuration
    pub fn global_config(&self) -> &InputConfig {
        &self.global_config
    }

    /// Get the player-specific action for a source, without global fallback
    pub fn get_player_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.get_config(player_id)
            .and_then(|config| config.get_action(source))
    }

    /// Get the action for a given input source and player
    /// Checks player-specific bindings first, then global bindings
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.get_player_action(player_id, source)
            .or_else(|| self.global_config.get_action(source))
    }

    /// Bind a source for one player, refusing keys another player or the
    /// global table already owns
    pub fn bind_exclusive(
        &mut self,
        player_id: usize,
        source: InputSource,
        action: Action,
    ) -> Result<(), InputError> {
        if player_id >= self.configs.len() {
            return Err(InputError::UnknownPlayer(player_id));
        }

        let owners = self
            .configs
            .iter()
            .filter(|config| config.player_id() != player_id)
            .chain(std::iter::once(&self.global_config));
        for config in owners {
            if let Some(existing) = config.get_action(source) {
                return Err(InputError::SourceTaken {
                    key: source,
                    action: existing,
                    owner: config.player_id(),
                });
            }
        }

        self.configs[player_id].bind(source, action);
        Ok(())
    }

    /// Move each overridden action onto its new key. Keys owned by the other
    /// player or the global table are refused; on any error every table goes
    /// back to its defaults.
    pub fn apply_overrides(&mut self, overrides: &[BindingOverride]) -> Result<(), InputError> {
        for o in overrides {
            if let Some(config) = self.configs.get_mut(o.player_id) {
                config.unbind_action(o.action);
            }
            if let Err(e) = self.bind_exclusive(o.player_id, o.source, o.action) {
                self.reset_all_to_defaults();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Reset all configurations to defaults
    pub fn reset_all_to_defaults(&mut self) {
        for config in &mut self.configs {
            config.reset_to_defaults();
        }
        self.global_config.reset_to_defaults();
    }
}

impl Default for InputConfigManager {
    fn default() -> Self {
        Self::new(2)
    }
}
