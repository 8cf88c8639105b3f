//! Runtime configuration for the terminal game.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::term::game_view::MAX_CELL_SIZE;

pub const SEED_VAR: &str = "BLOCK_BLAST_SEED";
pub const LOG_PATH_VAR: &str = "BLOCK_BLAST_LOG_PATH";
pub const CELL_WIDTH_VAR: &str = "BLOCK_BLAST_CELL_WIDTH";
pub const CELL_HEIGHT_VAR: &str = "BLOCK_BLAST_CELL_HEIGHT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed seed for the piece sequence; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Log file; logging is off without one.
    pub log_path: Option<PathBuf>,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
    /// Terminal rows per grid cell.
    pub cell_height: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: 4,
            cell_height: 2,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let seed = get(SEED_VAR)
            .map(|s| {
                s.parse::<u64>()
                    .with_context(|| format!("{SEED_VAR}={s:?} is not a u64"))
            })
            .transpose()?;

        let log_path = get(LOG_PATH_VAR).map(PathBuf::from);

        let cell_width = match get(CELL_WIDTH_VAR) {
            Some(s) => parse_cell_dim(CELL_WIDTH_VAR, &s)?,
            None => defaults.cell_width,
        };
        let cell_height = match get(CELL_HEIGHT_VAR) {
            Some(s) => parse_cell_dim(CELL_HEIGHT_VAR, &s)?,
            None => defaults.cell_height,
        };

        Ok(Self {
            seed,
            log_path,
            cell_width,
            cell_height,
        })
    }
}

fn parse_cell_dim(key: &str, raw: &str) -> Result<u16> {
    let v: u16 = raw
        .parse()
        .with_context(|| format!("{key}={raw:?} is not a number"))?;
    if !(1..=MAX_CELL_SIZE).contains(&v) {
        bail!("{key}={v} must be between 1 and {MAX_CELL_SIZE}");
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn reads_all_values() {
        let config = GameConfig::from_lookup(lookup(&[
            (SEED_VAR, "42"),
            (LOG_PATH_VAR, " /tmp/bb.log "),
            (CELL_WIDTH_VAR, "2"),
            (CELL_HEIGHT_VAR, "1"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/bb.log")));
        assert_eq!((config.cell_width, config.cell_height), (2, 1));
    }

    #[test]
    fn blank_values_are_unset() {
        let config =
            GameConfig::from_lookup(lookup(&[(SEED_VAR, "  "), (LOG_PATH_VAR, "")])).unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(GameConfig::from_lookup(lookup(&[(SEED_VAR, "abc")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(SEED_VAR, "-1")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(CELL_WIDTH_VAR, "0")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(CELL_HEIGHT_VAR, "tall")])).is_err());
    }

    #[test]
    fn cell_size_upper_bound() {
        let max = MAX_CELL_SIZE.to_string();
        let config = GameConfig::from_lookup(lookup(&[(CELL_WIDTH_VAR, max.as_str())])).unwrap();
        assert_eq!(config.cell_width, MAX_CELL_SIZE);

        let over = (MAX_CELL_SIZE + 1).to_string();
        assert!(GameConfig::from_lookup(lookup(&[(CELL_WIDTH_VAR, over.as_str())])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(CELL_HEIGHT_VAR, "7000")])).is_err());
    }
}
