use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tui_2048::term::MAX_CELL_SIZE;

/// Storage file name used when `--storage` is not given.
const DEFAULT_STORAGE_FILE: &str = ".tui-2048.json";

const MIN_CELL_WIDTH: u16 = 5;
const MIN_CELL_HEIGHT: u16 = 1;

#[derive(Parser, Debug, Clone)]
#[command(name = "tui-2048")]
#[command(about = "Slide tiles, merge equal numbers, reach 2048")]
pub struct Config {
    /// Seed for tile spawns (random when omitted)
    #[arg(long, env = "TUI_2048_SEED")]
    pub seed: Option<u64>,

    /// JSON file holding the best score [default: $HOME/.tui-2048.json]
    #[arg(long, env = "TUI_2048_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Write logs to this file (no logging when omitted)
    #[arg(long, env = "TUI_2048_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long, env = "TUI_2048_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Tile width in terminal columns
    #[arg(long, default_value = "7")]
    pub cell_width: u16,

    /// Tile height in terminal rows
    #[arg(long, default_value = "3")]
    pub cell_height: u16,

    /// Disable mouse swipes
    #[arg(long)]
    pub no_mouse: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.cell_width < MIN_CELL_WIDTH {
            return Err(anyhow!("cell_width must be at least {MIN_CELL_WIDTH}"));
        }

        if self.cell_height < MIN_CELL_HEIGHT {
            return Err(anyhow!("cell_height must be at least {MIN_CELL_HEIGHT}"));
        }

        if self.cell_width > MAX_CELL_SIZE || self.cell_height > MAX_CELL_SIZE {
            return Err(anyhow!("cell_width and cell_height must be at most {MAX_CELL_SIZE}"));
        }

        if self.log_level.trim().is_empty() {
            return Err(anyhow!("log_level cannot be empty"));
        }

        if matches!(&self.storage, Some(p) if p.as_os_str().is_empty()) {
            return Err(anyhow!("storage path cannot be empty"));
        }

        Ok(())
    }

    /// Resolved best-score file: `--storage`, else `$HOME/.tui-2048.json`,
    /// else the working directory.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage {
            return path.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) if !home.is_empty() => PathBuf::from(home).join(DEFAULT_STORAGE_FILE),
            _ => PathBuf::from(DEFAULT_STORAGE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["tui-2048"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_are_valid() {
        let config = parse(&[]);
        assert_eq!(config.cell_width, 7);
        assert_eq!(config.cell_height, 3);
        assert!(!config.no_mouse);
        config.validate().unwrap();
    }

    #[test]
    fn explicit_storage_wins() {
        let config = parse(&["--storage", "/tmp/best.json", "--seed", "42"]);
        assert_eq!(config.storage_path(), PathBuf::from("/tmp/best.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn default_storage_file_name() {
        let config = parse(&[]);
        assert!(config.storage_path().ends_with(DEFAULT_STORAGE_FILE));
    }

    #[test]
    fn tiny_cells_are_rejected() {
        assert!(parse(&["--cell-width", "4"]).validate().is_err());
        assert!(parse(&["--cell-height", "0"]).validate().is_err());
        assert!(parse(&["--cell-width", "5", "--cell-height", "1"]).validate().is_ok());
    }

    #[test]
    fn huge_cells_are_rejected() {
        assert!(parse(&["--cell-width", "64", "--cell-height", "64"]).validate().is_ok());
        assert!(parse(&["--cell-width", "65"]).validate().is_err());
        assert!(parse(&["--cell-height", "20000"]).validate().is_err());
    }
}
