//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "specimen",
    bin_name = "specimen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Example values for API docs, synthesized from type metadata",
    long_about = "Specimen reads type manifests and prints a representative \
                  JSON example for any described type, honouring field \
                  documentation hints.",
    after_help = "EXAMPLES:\n\
        \x20 specimen render --manifest types/ UserVo\n\
        \x20 specimen render --manifest model.toml Node --max-depth 3 --compact\n\
        \x20 specimen types  --manifest types/\n\
        \x20 specimen completions bash > /usr/share/bash-completion/completions/specimen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synthesize and print the example of a type.
    #[command(
        visible_alias = "r",
        about = "Render the example JSON of a type",
        after_help = "EXAMPLES:\n\
            \x20 specimen render -m types/ Person\n\
            \x20 specimen render -m types/ UserVo --field scores\n\
            \x20 specimen render -m types/ Node --max-depth 2 --raw"
    )]
    Render(RenderArgs),

    /// List the types a manifest set describes.
    #[command(
        visible_alias = "ls",
        about = "List registered types",
        after_help = "EXAMPLES:\n\
            \x20 specimen types -m types/\n\
            \x20 specimen types -m types/ --all --format json"
    )]
    Types(TypesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 specimen completions bash > ~/.local/share/bash-completion/completions/specimen\n\
            \x20 specimen completions zsh  > ~/.zfunc/_specimen\n\
            \x20 specimen completions fish > ~/.config/fish/completions/specimen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 specimen config get synthesis.max_depth\n\
            \x20 specimen config list\n\
            \x20 specimen config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `specimen render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Manifest file or directory of manifests.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "PATH",
        env = "SPECIMEN_MANIFEST",
        help = "Manifest file or directory"
    )]
    pub manifest: PathBuf,

    /// Exact registered name of the root type.
    #[arg(value_name = "TYPE", help = "Type to render")]
    pub type_name: String,

    /// Render one field of the type instead, with the field as context for
    /// its generic arguments.
    #[arg(
        short = 'f',
        long = "field",
        value_name = "FIELD",
        help = "Render a single field of TYPE"
    )]
    pub field: Option<String>,

    /// Override `synthesis.max_depth`.
    #[arg(
        short = 'd',
        long = "max-depth",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum nesting depth"
    )]
    pub max_depth: Option<u32>,

    /// Single-line JSON regardless of `render.pretty`.
    #[arg(long = "compact", help = "Print compact JSON")]
    pub compact: bool,

    /// Write remaining nulls as they are, without category coercion.
    #[arg(long = "raw", help = "Disable null coercion")]
    pub raw: bool,
}

// ── types ─────────────────────────────────────────────────────────────────────

/// Arguments for `specimen types`.
#[derive(Debug, Args)]
pub struct TypesArgs {
    /// Manifest file or directory of manifests.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "PATH",
        env = "SPECIMEN_MANIFEST",
        help = "Manifest file or directory"
    )]
    pub manifest: PathBuf,

    /// Include built-in scalars and containers.
    #[arg(long = "all", help = "Show built-in types too")]
    pub all: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        help = "Output format (defaults to table, or json with --output-format json)"
    )]
    pub format: Option<ListFormat>,
}

/// Output format for the `types` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `specimen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `specimen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.policy.write_nulls`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
