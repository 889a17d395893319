pub mod args;
pub mod clean;
pub mod config;
pub mod segments;

pub use args::{Cli, CliCommand};
pub use clean::{handle_check_command, handle_clean_command};
pub use config::{handle_config_command, load_config};
pub use segments::handle_segments_command;
