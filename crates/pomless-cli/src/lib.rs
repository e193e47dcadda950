//! pomless command-line interface.
//!
pub mod options;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pomless_core::ReaderOptions;

pub use options::ReaderArgs;
pub use output::{OutputFormat, render_model, render_parent};

#[derive(Parser, Debug)]
#[command(
    name = "pomless",
    about = "pomless: project models for modules without a pom.xml",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub reader: ReaderArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize the model of the module marked by a build.properties file
    Read {
        /// Path to the module's build.properties
        #[arg(value_name = "BUILD_PROPERTIES")]
        marker: PathBuf,
    },
    /// Print the parent reference of a module directory
    Parent {
        /// Module directory
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

/// Run one command and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let reader = cli.reader.build_reader()?;

    match &cli.command {
        Command::Read { marker } => {
            let model = reader.read(&ReaderOptions::from_source(marker))?;
            render_model(&model, cli.format)
        }
        Command::Parent { dir } => {
            let parent = reader.find_parent(dir)?;
            render_parent(&parent, cli.format)
        }
    }
}
