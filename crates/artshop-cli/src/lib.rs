mod args;
mod commands;
pub mod config;
mod handlers;
mod types;
mod ui;

pub use args::{ArtCommand, ArtistCommand, Cli, ClassificationCommand, Commands, ConfigCommand};
pub use commands::run;
pub use types::OutputFormat;
