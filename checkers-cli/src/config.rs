//! 命令行配置
//!
//! 优先级：`--depth` > 环境变量 `CHECKERS_DEPTH` > 难度默认值

use std::path::PathBuf;

use checkers_ai::{AiConfig, Difficulty};
use clap::{Parser, ValueEnum};

/// 命令行难度选项
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Checkers - human (blue) vs AI (red) in the terminal
#[derive(Parser, Debug)]
#[command(name = "checkers")]
#[command(about = "Play checkers against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AI difficulty
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,

    /// Search depth, overrides the difficulty default
    #[arg(long, env = "CHECKERS_DEPTH")]
    pub depth: Option<u8>,

    /// Saved game to resume
    #[arg(long)]
    pub load: Option<PathBuf>,
}

impl Cli {
    /// 生成 AI 配置
    pub fn ai_config(&self) -> AiConfig {
        let config = AiConfig::from_difficulty(self.difficulty.into());
        match self.depth {
            Some(depth) => config.with_depth(depth),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["checkers"]).unwrap();
        assert_eq!(cli.difficulty, DifficultyArg::Medium);
        assert_eq!(cli.load, None);
        assert_eq!(Cli { depth: None, ..cli }.ai_config(), AiConfig::default());
    }

    #[test]
    fn test_difficulty_and_depth() {
        let cli =
            Cli::try_parse_from(["checkers", "--difficulty", "hard", "--depth", "3"]).unwrap();
        let config = cli.ai_config();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_difficulty_sets_depth() {
        let cli = Cli::try_parse_from(["checkers", "--difficulty", "easy", "--depth", "2"]).unwrap();
        assert_eq!(cli.ai_config(), AiConfig::from_difficulty(Difficulty::Easy));

        let cli = Cli {
            difficulty: DifficultyArg::Hard,
            depth: None,
            load: None,
        };
        assert_eq!(cli.ai_config().max_depth, 6);
    }

    #[test]
    fn test_depth_reads_env() {
        let command = Cli::command();
        let depth = command
            .get_arguments()
            .find(|arg| arg.get_id() == "depth")
            .unwrap();
        assert_eq!(depth.get_env(), Some(std::ffi::OsStr::new("CHECKERS_DEPTH")));
    }

    #[test]
    fn test_load_path() {
        let cli = Cli::try_parse_from(["checkers", "--load", "game.json"]).unwrap();
        assert_eq!(cli.load, Some(PathBuf::from("game.json")));
    }

    #[test]
    fn test_errors() {
        assert!(Cli::try_parse_from(["checkers", "--difficulty", "insane"]).is_err());
        assert!(Cli::try_parse_from(["checkers", "--depth", "deep"]).is_err());
        assert!(Cli::try_parse_from(["checkers", "--depth", "300"]).is_err());
        assert!(Cli::try_parse_from(["checkers", "--depth"]).is_err());
        assert!(Cli::try_parse_from(["checkers", "--verbose"]).is_err());
    }
}
