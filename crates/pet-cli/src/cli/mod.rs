use clap::Parser;
use pet_config::PetCareConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

use crate::commands::shared::parse::parse_enum;

/// Top-level CLI parser for the `petcare` binary.
#[derive(Debug, Parser)]
#[command(
    name = "petcare",
    version,
    about = "Pet care tracker - recurring care tasks for your pets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Data file path (defaults to `storage.data_file`)
    #[arg(short, long, global = true)]
    pub data_file: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to config for anything not given.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default format is not a known format.
    pub fn global_flags(&self, config: &PetCareConfig) -> anyhow::Result<GlobalFlags> {
        let format = match self.format {
            Some(format) => format,
            None => parse_enum(&config.general.default_format, "general.default_format")?,
        };
        Ok(GlobalFlags {
            format,
            quiet: self.quiet,
            data_file: self.data_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pet_config::PetCareConfig;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["petcare", "--format", "json", "--verbose", "due"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Due(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["petcare", "due", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["petcare", "--format", "xml", "due"]).is_err());
    }

    #[test]
    fn format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["petcare", "due"]).expect("cli should parse");
        let mut config = PetCareConfig::default();
        config.general.default_format = "raw".into();

        let flags = cli.global_flags(&config).expect("flags should resolve");

        assert_eq!(flags.format, OutputFormat::Raw);
    }

    #[test]
    fn explicit_format_beats_config() {
        let cli = Cli::try_parse_from(["petcare", "-f", "json", "due"]).expect("cli should parse");
        let flags = cli.global_flags(&PetCareConfig::default()).unwrap();
        assert_eq!(flags.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_configured_format_is_an_error() {
        let cli = Cli::try_parse_from(["petcare", "due"]).expect("cli should parse");
        let mut config = PetCareConfig::default();
        config.general.default_format = "yaml".into();

        let err = cli.global_flags(&config).unwrap_err();

        assert!(err.to_string().contains("invalid general.default_format 'yaml'"));
    }

    #[test]
    fn data_file_flag_is_copied() {
        let cli = Cli::try_parse_from(["petcare", "--data-file", "/tmp/pets.json", "owner", "list"])
            .expect("cli should parse");
        let flags = cli.global_flags(&PetCareConfig::default()).unwrap();
        assert_eq!(flags.data_file.as_deref(), Some("/tmp/pets.json"));
    }
}
