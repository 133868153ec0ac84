//! Per-game engine configuration.
//!
//! Loaded by the session layer from JSON or from the environment. Every field
//! has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};

/// Environment variable read by [`GameConfig::from_env`].
pub const PROMOTION_ENV_VAR: &str = "CHESS_ARBITER_PROMOTION";

/// What happens when a pawn reaches its far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionPolicy {
    /// The pawn waits on the far rank until `promote_pawn` picks a kind.
    #[default]
    Explicit,
    /// `make_move` turns the pawn into a queen immediately.
    AutoQueen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GameConfig {
    pub promotion: PromotionPolicy,
}

impl GameConfig {
    pub fn from_json(json: &str) -> ChessResult<Self> {
        serde_json::from_str(json).map_err(|e| ChessErrors::InvalidConfig(e.to_string()))
    }

    /// Reads `CHESS_ARBITER_PROMOTION` (`explicit` or `auto-queen`); unset
    /// means default.
    pub fn from_env() -> ChessResult<Self> {
        match std::env::var(PROMOTION_ENV_VAR) {
            Ok(value) => Ok(Self {
                promotion: parse_promotion_policy(&value)?,
            }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(ChessErrors::InvalidConfig(format!("{PROMOTION_ENV_VAR}: {e}"))),
        }
    }
}

fn parse_promotion_policy(value: &str) -> ChessResult<PromotionPolicy> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("explicit") {
        Ok(PromotionPolicy::Explicit)
    } else if value.eq_ignore_ascii_case("auto-queen") || value.eq_ignore_ascii_case("auto") {
        Ok(PromotionPolicy::AutoQueen)
    } else {
        Err(ChessErrors::InvalidConfig(format!(
            "{PROMOTION_ENV_VAR}: unknown promotion policy '{value}'"
        )))
    }
}
