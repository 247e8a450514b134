//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use bannergen::banner::whitespace;
use bannergen::{BannerConfig, FigletRenderer, FontResolver, FontSpec, Renderer};

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Stripped glyph lines for `text` in a built-in font.
pub fn glyph_lines(font: &str, text: &str) -> Vec<String> {
    let font = FontResolver::new()
        .resolve(&FontSpec::parse(font))
        .expect("built-in font should resolve");
    whitespace::strip(&FigletRenderer.render(&font, text))
}

/// Config writing into `dir` with no info line and no color.
pub fn plain_config(dir: &Path, text: &str) -> BannerConfig {
    BannerConfig {
        output_directory: dir.to_path_buf(),
        include_info: false,
        ..BannerConfig::new(text)
    }
}

/// Run bannergen in `cwd` and capture output.
pub fn run_bannergen(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_bannergen"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute bannergen");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
