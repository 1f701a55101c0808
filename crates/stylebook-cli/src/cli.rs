//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::output::OutputMode;

/// Browse the component catalog and resolve component classes.
#[derive(Debug, Parser)]
#[command(name = "stylebook", version, about)]
pub struct Cli {
    /// YAML stylesheet adding or replacing components (repeatable)
    #[arg(
        long = "stylesheet",
        value_name = "PATH",
        env = "STYLEBOOK_STYLESHEET",
        value_delimiter = ',',
        global = true
    )]
    pub stylesheets: Vec<PathBuf>,

    /// Output mode
    #[arg(long, value_enum, default_value_t = OutputMode::Auto, global = true)]
    pub output: OutputMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every component with its group and axes
    List,

    /// Show the interactive controls of a component
    Controls {
        /// Component name
        component: String,
    },

    /// Resolve a selection into class tokens
    Resolve {
        /// Component name
        component: String,

        /// Choose an option, as AXIS=OPTION; a bare AXIS turns a toggle on
        #[arg(
            short = 's',
            long = "set",
            value_name = "AXIS=OPTION",
            value_parser = parse_assignment
        )]
        assignments: Vec<(String, String)>,

        /// Extra class tokens appended last (repeatable)
        #[arg(short, long = "class", value_name = "TOKENS")]
        classes: Vec<String>,

        /// Start from a named preset
        #[arg(short, long)]
        preset: Option<String>,
    },

    /// Resolve every preset of a component
    Stories {
        /// Component name
        component: String,
    },

    /// Render a template file that calls `variants(...)`
    Render {
        /// Template file; includes are resolved relative to its directory
        template: PathBuf,

        /// JSON file providing the template context
        #[arg(short, long, value_name = "PATH")]
        data: Option<PathBuf>,
    },
}

/// Parses `axis=option`, or a bare `axis` meaning the toggle is on.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (axis, option) = match raw.split_once('=') {
        Some((axis, option)) => (axis.trim(), option.trim()),
        None => (raw.trim(), stylebook::TOGGLE_ON),
    };
    if axis.is_empty() {
        return Err(format!("missing axis name in \"{raw}\""));
    }
    if option.is_empty() {
        return Err(format!("missing option for axis \"{axis}\""));
    }
    Ok((axis.to_string(), option.to_string()))
}
