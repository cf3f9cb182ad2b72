use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prompt shown before every echoed command line
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub delays: DelayConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

fn default_prompt() -> String {
    "robot@repair:~$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            delays: DelayConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Delays for the timer-driven command stages, in milliseconds.
///
/// These drive the scheduler; tests shrink them or advance a logical clock
/// instead of waiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Delay between "applying voltage" and the evaluation result
    #[serde(default = "default_voltage_apply_ms")]
    pub voltage_apply_ms: u64,

    /// Delay between a successful repair and the vault unlock
    #[serde(default = "default_vault_unlock_ms")]
    pub vault_unlock_ms: u64,

    /// Delay between the stages of the `hack` progress bar
    #[serde(default = "default_hack_step_ms")]
    pub hack_step_ms: u64,

    /// Delay between the stages of the `coffee` brewing sequence
    #[serde(default = "default_coffee_step_ms")]
    pub coffee_step_ms: u64,
}

fn default_voltage_apply_ms() -> u64 {
    1500
}

fn default_vault_unlock_ms() -> u64 {
    2000
}

fn default_hack_step_ms() -> u64 {
    1000
}

fn default_coffee_step_ms() -> u64 {
    800
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            voltage_apply_ms: default_voltage_apply_ms(),
            vault_unlock_ms: default_vault_unlock_ms(),
            hack_step_ms: default_hack_step_ms(),
            coffee_step_ms: default_coffee_step_ms(),
        }
    }
}

impl DelayConfig {
    pub fn voltage_apply(&self) -> Duration {
        Duration::from_millis(self.voltage_apply_ms)
    }

    pub fn vault_unlock(&self) -> Duration {
        Duration::from_millis(self.vault_unlock_ms)
    }

    pub fn hack_step(&self) -> Duration {
        Duration::from_millis(self.hack_step_ms)
    }

    pub fn coffee_step(&self) -> Duration {
        Duration::from_millis(self.coffee_step_ms)
    }
}

/// TUI behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the chip status monitor panel next to the terminal
    #[serde(default = "default_true")]
    pub status_panel: bool,

    /// Event poll interval for the main loop, in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    50
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_panel: default_true(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}
