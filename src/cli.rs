//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can build the man page from it.

use crate::config::BannerOverrides;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Version string with git hash and build date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("BANNERGEN_BUILD_DATE"),
    ")"
);

/// Generate ASCII-art startup banners from FIGlet fonts
#[derive(Debug, Parser)]
#[command(name = "bannergen", version, long_version = LONG_VERSION)]
#[command(about = "Generate ASCII-art startup banners from FIGlet fonts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render text into a banner file
    #[command(long_about = "Render text into a banner file.\n\n\
        Settings are read from the [banner] table of banner.toml (or --config),\n\
        then overridden by command-line flags. The project name and version\n\
        come from Cargo.toml (or --manifest-path).")]
    Generate(GenerateArgs),

    /// List the built-in fonts
    Fonts {
        /// Directory of .flf files to list instead of the bundled fonts
        #[arg(long, value_name = "DIR")]
        font_dir: Option<PathBuf>,
    },

    /// List the supported banner colors
    Colors,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Config file with a [banner] table [default: banner.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Cargo manifest for project name and version [default: Cargo.toml if present]
    #[arg(long, value_name = "FILE")]
    pub manifest_path: Option<PathBuf>,

    /// Text to render [default: project name]
    #[arg(short, long)]
    pub text: Option<String>,

    /// Directory to write the banner to [default: target/]
    #[arg(short, long, value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Banner filename [default: banner.txt]
    #[arg(long)]
    pub filename: Option<String>,

    /// Append the info line
    #[arg(long, conflicts_with = "no_info")]
    pub include_info: bool,

    /// Do not append the info line
    #[arg(long)]
    pub no_info: bool,

    /// Info line template; ${project.version} is replaced with the project version
    #[arg(long, value_name = "TEMPLATE")]
    pub info: Option<String>,

    /// Built-in font name, or file:<path> for an external font [default: standard]
    #[arg(short, long)]
    pub font: Option<String>,

    /// Banner color, or "default" for none [default: default]
    #[arg(short, long)]
    pub color: Option<String>,

    /// Replace spaces with non-breaking spaces
    #[arg(long, conflicts_with = "no_nbsp")]
    pub nbsp: bool,

    /// Keep plain spaces
    #[arg(long)]
    pub no_nbsp: bool,

    /// Look up built-in fonts in this directory of .flf files
    #[arg(long, value_name = "DIR")]
    pub font_dir: Option<PathBuf>,

    /// Print the banner to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// The configuration layer set by command-line flags.
    pub fn overrides(&self) -> BannerOverrides {
        BannerOverrides {
            text: self.text.clone(),
            output_directory: self.output_directory.clone(),
            filename: self.filename.clone(),
            include_info: switch(self.include_info, self.no_info),
            info: self.info.clone(),
            font: self.font.clone(),
            color: self.color.clone(),
            use_non_breaking_space: switch(self.nbsp, self.no_nbsp),
        }
    }
}

/// Collapse an `--x`/`--no-x` pair; neither given leaves the value unset.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
