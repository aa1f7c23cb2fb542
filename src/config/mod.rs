pub mod script;

#[cfg(feature = "cli")]
use crate::utils::error::{RenderError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "record-renderer")]
#[command(about = "Render person, employee and counter records to stdout")]
pub struct CliConfig {
    #[arg(long, help = "TOML script to render instead of the built-in sequence")]
    pub script: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.script {
            validate_path("script", path).map_err(|e| RenderError::ConfigError {
                message: format!("--script: {}", e),
            })?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let config = CliConfig::try_parse_from(["record-renderer"]).unwrap();
        assert_eq!(config.script, None);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_script_and_verbose() {
        let config =
            CliConfig::try_parse_from(["record-renderer", "--script", "team.toml", "--verbose"])
                .unwrap();
        assert_eq!(config.script.as_deref(), Some("team.toml"));
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_script_path_rejected() {
        let config = CliConfig::try_parse_from(["record-renderer", "--script", ""]).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RenderError::ConfigError { .. }));
        assert_eq!(err.recovery_suggestion(), "Review the command line arguments");
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(CliConfig::try_parse_from(["record-renderer", "extra"]).is_err());
    }
}
