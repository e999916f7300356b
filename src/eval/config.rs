use super::error::EvalError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONFIG_PATH: &str = "eval_config.json";

/// Upper bound for per-piece and per-move weights.
pub const MAX_WEIGHT: i32 = 100_000;
/// Upper bound for a terminal penalty at `max_depth`.
pub const MAX_TERMINAL: i64 = 1_000_000_000;
pub const MAX_DEPTH: u32 = 1_000;

static CONFIG: Lazy<EvalConfig> = Lazy::new(EvalConfig::load_or_default);

/// Tunable weights of the static evaluator.
///
/// Every field is optional in JSON; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    // Material
    pub val_pawn: i32,
    pub val_knight: i32,
    pub val_rook: i32,
    pub val_queen: i32,
    pub bonus_single_bishop: i32,
    /// Paid per bishop once a side has two or more.
    pub bonus_per_bishop: i32,

    // Hanging pieces
    pub attacked_pawn: i32,
    pub attacked_minor: i32,
    pub attacked_rook: i32,
    pub attacked_queen: i32,
    pub king_in_check: i32,

    // Mobility
    pub weight_mobility: i32,
    pub checkmate_penalty: i32,
    pub stalemate_penalty: i32,

    // Positional
    /// Material at or above this selects the midgame king table.
    pub phase_threshold: i32,
    pub king_mobility_midgame: i32,
    pub king_mobility_endgame: i32,

    pub tempo: i32,
    pub max_depth: u32,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            val_pawn: 100,
            val_knight: 300,
            val_rook: 500,
            val_queen: 900,
            bonus_single_bishop: 250,
            bonus_per_bishop: 300,

            attacked_pawn: 64,
            attacked_minor: 300,
            attacked_rook: 500,
            attacked_queen: 900,
            king_in_check: 200,

            weight_mobility: 1,
            checkmate_penalty: 200_000,
            stalemate_penalty: 150_000,

            phase_threshold: 1750,
            king_mobility_midgame: 10,
            king_mobility_endgame: 30,

            tempo: 50,
            max_depth: 64,
        }
    }
}

impl EvalConfig {
    /// Cached process-wide configuration, read once from `eval_config.json`.
    pub fn get() -> &'static EvalConfig {
        &CONFIG
    }

    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config = Self::load_from_json(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load(CONFIG_PATH).unwrap_or_else(|e| {
            log::warn!("using default evaluation config ({}): {}", CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Rejects negative weights and weights large enough to overflow a
    /// full 64-square pass or a terminal score at `max_depth`.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.max_depth > MAX_DEPTH {
            return Err(EvalError::InvalidConfig(format!(
                "max_depth {} exceeds {}",
                self.max_depth, MAX_DEPTH
            )));
        }
        let weights = [
            ("val_pawn", self.val_pawn),
            ("val_knight", self.val_knight),
            ("val_rook", self.val_rook),
            ("val_queen", self.val_queen),
            ("bonus_single_bishop", self.bonus_single_bishop),
            ("bonus_per_bishop", self.bonus_per_bishop),
            ("attacked_pawn", self.attacked_pawn),
            ("attacked_minor", self.attacked_minor),
            ("attacked_rook", self.attacked_rook),
            ("attacked_queen", self.attacked_queen),
            ("king_in_check", self.king_in_check),
            ("weight_mobility", self.weight_mobility),
            ("king_mobility_midgame", self.king_mobility_midgame),
            ("king_mobility_endgame", self.king_mobility_endgame),
            ("tempo", self.tempo),
        ];
        for (name, value) in weights {
            if !(0..=MAX_WEIGHT).contains(&value) {
                return Err(EvalError::InvalidConfig(format!(
                    "{} must be within 0..={}, got {}",
                    name, MAX_WEIGHT, value
                )));
            }
        }
        if self.phase_threshold < 0 {
            return Err(EvalError::InvalidConfig(format!(
                "phase_threshold must not be negative, got {}",
                self.phase_threshold
            )));
        }

        // max_depth <= MAX_DEPTH, so the conversion is lossless.
        let depth = self.max_depth as i64;
        for (name, penalty) in [
            ("checkmate_penalty", self.checkmate_penalty),
            ("stalemate_penalty", self.stalemate_penalty),
        ] {
            if penalty < 0 || i64::from(penalty) * depth > MAX_TERMINAL {
                return Err(EvalError::InvalidConfig(format!(
                    "{} * max_depth must be within 0..={}",
                    name, MAX_TERMINAL
                )));
            }
        }
        Ok(())
    }
}
