//! CLI argument definitions for the mappath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mappath::doc::Format;

/// How to decode the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Pick from the file extension (.yaml/.yml are YAML, anything else JSON)
    Auto,
    Json,
    Yaml,
}

impl InputFormat {
    /// Resolves to a concrete decoder, or `None` to use the file extension.
    ///
    /// Fails if YAML was requested but support was compiled out.
    pub fn resolve(self) -> Result<Option<Format>, String> {
        match self {
            InputFormat::Auto => Ok(None),
            InputFormat::Json => Ok(Some(Format::Json)),
            #[cfg(feature = "yaml")]
            InputFormat::Yaml => Ok(Some(Format::Yaml)),
            #[cfg(not(feature = "yaml"))]
            InputFormat::Yaml => Err("this build of mappath has no YAML support".to_string()),
        }
    }
}

/// How to print results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Plain text, one value per line
    Human,
    /// Compact JSON
    Json,
}

/// Type to convert the value at a path into
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Bool,
    Int,
    Float,
    String,
    Map,
    /// The raw list, elements unconverted
    List,
    Bools,
    Ints,
    Floats,
    Strings,
    Maps,
}

/// Read values out of JSON and YAML documents by path
#[derive(Parser, Debug)]
#[command(name = "mappath")]
#[command(about = "mappath: read values out of JSON and YAML documents by path")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        global = true,
        default_value = "human",
        env = "MAPPATH_OUTPUT"
    )]
    pub output: OutputArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Check whether anything exists at a path (exit code 0 if it does, 1 if not)
    Has(HasArgs),
    /// Print the value at SUBPATH for each map in the list at PATH
    Children(ChildrenArgs),
}

/// Where to read the document from
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Document to read
    pub file: PathBuf,

    /// Input format
    #[arg(short, long, default_value = "auto", env = "MAPPATH_FORMAT")]
    pub format: InputFormat,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Slash-separated path, e.g. servers/0/host
    pub path: String,

    /// Convert the value into this type. Without it the raw value is printed.
    #[arg(short = 'a', long = "as", value_enum)]
    pub target: Option<Target>,

    /// Value to print when the path does not exist.
    /// Parsed into the --as type; lists and maps are given as JSON.
    #[arg(short, long, requires = "target")]
    pub default: Option<String>,
}

/// Arguments for the has command
#[derive(clap::Args, Debug)]
pub struct HasArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Slash-separated path
    pub path: String,
}

/// Arguments for the children command
#[derive(clap::Args, Debug)]
pub struct ChildrenArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path to a list of maps
    pub path: String,

    /// Path inside each map
    pub subpath: String,

    /// Convert each value into this type
    #[arg(short = 'a', long = "as", value_enum)]
    pub target: Option<Target>,
}
