use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::normalizer::{OptionOverrides, PreserveMode};

#[derive(Parser, Debug)]
#[command(name = "tidyscript")]
#[command(about = "Clean up speech-to-text transcripts", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Clean a transcript (file or stdin)
    Clean(CleanCliArgs),
    /// Clean timed segments (JSON array or whisper.cpp output)
    Segments(SegmentsCliArgs),
    /// Report whether a transcript looks like it needs cleaning
    Check(CheckCliArgs),
    /// Inspect or create the config file
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

/// Per-run overrides for the configured normalization options.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct NormalizeFlags {
    /// Leave filler words in place
    #[arg(long)]
    pub keep_fillers: bool,
    /// Leave repeated words and phrases in place
    #[arg(long)]
    pub keep_repetitions: bool,
    /// Leave spacing and punctuation untouched
    #[arg(long)]
    pub keep_spacing: bool,
    /// Do not capitalize sentences
    #[arg(long)]
    pub no_capitalize: bool,
    /// Extra filler phrase to remove (repeatable)
    #[arg(long = "filler", value_name = "PHRASE")]
    pub fillers: Vec<String>,
    /// Phrase exempt from filler removal (repeatable)
    #[arg(long = "preserve", value_name = "PHRASE")]
    pub preserve: Vec<String>,
    /// Remove preserved phrases anyway, only leave them out of the filler count
    #[arg(long)]
    pub count_only_preserve: bool,
}

impl NormalizeFlags {
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            remove_fillers: self.keep_fillers.then_some(false),
            fix_repetitions: self.keep_repetitions.then_some(false),
            normalize_spacing: self.keep_spacing.then_some(false),
            capitalize_sentences: self.no_capitalize.then_some(false),
            custom_fillers: self.fillers.clone(),
            preserve_words: self.preserve.clone(),
            preserve_mode: self.count_only_preserve.then_some(PreserveMode::CountOnly),
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct CleanCliArgs {
    /// Transcript file to read (stdin when omitted or "-")
    pub file: Option<PathBuf>,
    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the full result (counts, timing) as JSON
    #[arg(long)]
    pub json: bool,
    /// Skip cleaning when the quick check finds nothing to fix
    #[arg(long)]
    pub skip_clean: bool,
    /// Also copy the cleaned text to the clipboard
    #[arg(short, long)]
    pub copy: bool,
    #[command(flatten)]
    pub normalize: NormalizeFlags,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentFormat {
    /// JSON array of {"text", "start", "end", ...} objects
    #[default]
    Json,
    /// whisper.cpp console output with [HH:MM:SS.mmm --> HH:MM:SS.mmm] prefixes
    WhisperCpp,
}

#[derive(ClapArgs, Debug)]
pub struct SegmentsCliArgs {
    /// Segment file to read (stdin when omitted or "-")
    pub file: Option<PathBuf>,
    /// Input format
    #[arg(short, long, value_enum, default_value_t = SegmentFormat::Json)]
    pub format: SegmentFormat,
    /// Join all segments and clean them as one transcript
    #[arg(long)]
    pub combine: bool,
    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub normalize: NormalizeFlags,
}

#[derive(ClapArgs, Debug)]
pub struct CheckCliArgs {
    /// Transcript file to read (stdin when omitted or "-")
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::parse_from([
            "tidyscript",
            "clean",
            "notes.txt",
            "--json",
            "--keep-fillers",
            "--filler",
            "like",
            "--filler",
            "right",
            "--preserve",
            "honestly",
        ]);

        let CliCommand::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert!(args.json);

        let overrides = args.normalize.overrides();
        assert_eq!(overrides.remove_fillers, Some(false));
        assert_eq!(overrides.fix_repetitions, None);
        assert_eq!(overrides.custom_fillers, vec!["like", "right"]);
        assert_eq!(overrides.preserve_words, vec!["honestly"]);
        assert_eq!(overrides.preserve_mode, None);
    }

    #[test]
    fn test_parse_segments_format() {
        let cli = Cli::parse_from([
            "tidyscript",
            "-v",
            "segments",
            "--format",
            "whisper-cpp",
            "--combine",
        ]);

        assert!(cli.verbose);
        let CliCommand::Segments(args) = cli.command else {
            panic!("expected segments command");
        };
        assert_eq!(args.format, SegmentFormat::WhisperCpp);
        assert!(args.combine);
        assert!(args.file.is_none());
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        assert_eq!(NormalizeFlags::default().overrides(), OptionOverrides::default());
    }
}
