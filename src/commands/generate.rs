//! Generate subcommand handler

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use bannergen::cli::GenerateArgs;
use bannergen::config::{DEFAULT_CONFIG_FILE, DEFAULT_MANIFEST_FILE};
use bannergen::font::{DirectoryCatalog, FontCatalog};
use bannergen::{BannerConfig, BannerOverrides, FigletRenderer, Generator, ProjectInfo, Renderer};

/// Build the banner configuration and run the pipeline.
pub fn handle(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = build_config(&args, &cwd)?;
    debug!("Banner configuration: {:?}", config);

    match &args.font_dir {
        Some(dir) => run(
            Generator::with_parts(DirectoryCatalog::new(dir), FigletRenderer),
            &config,
            args.stdout,
        ),
        None => run(Generator::new(), &config, args.stdout),
    }
}

fn run<C: FontCatalog, R: Renderer>(
    generator: Generator<C, R>,
    config: &BannerConfig,
    to_stdout: bool,
) -> Result<()> {
    if to_stdout {
        let banner = generator.compose(config)?;
        print!("{}", banner);
    } else {
        generator.generate(config)?;
    }
    Ok(())
}

/// Layer defaults, the config file and command-line flags.
fn build_config(args: &GenerateArgs, cwd: &Path) -> Result<BannerConfig> {
    let mut overrides = BannerOverrides::default();
    if let Some(path) = explicit_or_default(&args.config, cwd, DEFAULT_CONFIG_FILE) {
        debug!("Reading config from {}", path.display());
        overrides = overrides.merge(BannerOverrides::load(&path)?);
    }
    overrides = overrides.merge(args.overrides());

    let manifest = explicit_or_default(&args.manifest_path, cwd, DEFAULT_MANIFEST_FILE);
    let project = manifest
        .as_deref()
        .map(ProjectInfo::load)
        .transpose()
        .context("Failed to read project metadata")?;
    let project_root = manifest
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(cwd);

    Ok(BannerConfig::resolve(overrides, project.as_ref(), project_root)?)
}

/// An explicitly given path, or `default_name` in `cwd` when that exists.
fn explicit_or_default(
    explicit: &Option<PathBuf>,
    cwd: &Path,
    default_name: &str,
) -> Option<PathBuf> {
    explicit.clone().or_else(|| {
        let candidate = cwd.join(default_name);
        candidate.is_file().then_some(candidate)
    })
}
