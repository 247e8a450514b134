//! Build script for bannergen - embeds the bundled font manifest and build info
//!
//! Always:
//! - Scans `fonts/*.flf` and writes `$OUT_DIR/bundled_fonts.rs`, a sorted
//!   `(name, contents)` table that the embedded font catalog includes at
//!   compile time
//! - Emits `BANNERGEN_BUILD_DATE` with the build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits `VERGEN_GIT_SHA=release` (clean version string without git hash)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory holding the bundled FIGlet fonts, relative to the manifest.
const FONTS_DIR: &str = "fonts";

/// File suffix recognized as a FIGlet font.
const FONT_SUFFIX: &str = "flf";

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    // Use the date command for cross-platform compatibility
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    // Fallback for systems where date command differs
    "unknown".to_string()
}

/// Collect `(name, absolute path)` for every bundled font, sorted by name.
fn collect_fonts(dir: &Path) -> Vec<(String, PathBuf)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            println!("cargo:warning=Cannot read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut fonts: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(FONT_SUFFIX))
        .filter_map(|path| {
            let name = path.file_stem()?.to_str()?.to_string();
            Some((name, path))
        })
        .collect();

    fonts.sort_by(|a, b| a.0.cmp(&b.0));
    fonts
}

/// Render the manifest as Rust source.
fn render_manifest(fonts: &[(String, PathBuf)]) -> String {
    let mut out = String::from(
        "/// Fonts bundled from `fonts/` at build time, sorted by name.\n\
         pub(crate) const BUNDLED_FONTS: &[(&str, &str)] = &[\n",
    );
    for (name, path) in fonts {
        out.push_str(&format!(
            "    ({:?}, include_str!({:?})),\n",
            name,
            path.display().to_string()
        ));
    }
    out.push_str("];\n");
    out
}

fn write_font_manifest() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let fonts_dir = Path::new(&manifest_dir).join(FONTS_DIR);
    println!("cargo:rerun-if-changed={}", fonts_dir.display());

    let fonts = collect_fonts(&fonts_dir);
    for (_, path) in &fonts {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string());
    let target = Path::new(&out_dir).join("bundled_fonts.rs");
    if let Err(e) = fs::write(&target, render_manifest(&fonts)) {
        panic!("Failed to write {}: {}", target.display(), e);
    }
}

fn main() {
    write_font_manifest();

    let build_date = get_build_date();
    println!("cargo:rustc-env=BANNERGEN_BUILD_DATE={}", build_date);

    // Only emit the real git SHA when NOT building with --features release
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        // Configure git info - we need the SHA
        // Use graceful fallback if git info is unavailable
        let git_result = GitclBuilder::default().sha(true).build();

        let emit_result = match git_result {
            Ok(git) => Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit()),
            Err(e) => {
                eprintln!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        if let Err(e) = emit_result {
            // If git info fails (e.g., not in a git repo), emit fallback value
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }

    #[cfg(feature = "release")]
    println!("cargo:rustc-env=VERGEN_GIT_SHA=release");
}
