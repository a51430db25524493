//! Command-line configuration.

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Onboarding carousel
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Directory holding the logo and slide images
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Window width in pixels (one page per screen width)
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["onboarding"]);
        assert_eq!(config.assets, PathBuf::from("assets"));
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.fps, FPS);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "onboarding", "--assets", "/tmp/a", "--width", "414", "--height", "896", "--log-level", "debug",
        ]);
        assert_eq!(config.assets, PathBuf::from("/tmp/a"));
        assert_eq!(config.width, 414);
        assert_eq!(config.height, 896);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_zero_width() {
        assert!(Config::try_parse_from(["onboarding", "--width", "0"]).is_err());
    }
}
