use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "specnav",
    version,
    about = "Navigate between Rails sources and their RSpec files",
    after_help = r#"Examples:
  specnav related --file app/models/user.rb
  specnav goto --file app/models/user.rb --line 12 --column 5
  specnav goto --file spec/models/user_spec.rb --line 8
  specnav goto --file app/models/user.rb --create --scaffold
  specnav scaffold --file app/interactions/send_welcome_email.rb
  specnav scaffold --file app/models/user.rb --method save
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print companion-file candidates for a path.
    Related {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        #[arg(long)]
        file: PathBuf,
    },
    /// Jump to the companion file, or offer to create it.
    Goto {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        #[arg(long)]
        file: PathBuf,
        /// Cursor line, 1-indexed.
        #[arg(long, default_value_t = 1)]
        line: i64,
        /// Cursor column, 1-indexed.
        #[arg(long, default_value_t = 1)]
        column: i64,
        /// Create the first candidate when no companion exists.
        #[arg(long)]
        create: bool,
        /// Seed a created spec file with a class scaffold.
        #[arg(long)]
        scaffold: bool,
    },
    /// Print generated spec text for a class or a single method.
    Scaffold {
        #[arg(long, default_value = ".")]
        repo: PathBuf,
        #[arg(long)]
        file: PathBuf,
        /// Generate for one method instead of the whole class.
        #[arg(long)]
        method: Option<String>,
    },
}
