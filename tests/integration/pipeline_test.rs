//! End-to-end tests for the banner pipeline

use std::fs;
use std::thread;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, glyph_lines, plain_config};
use bannergen::banner::{whitespace, RESET_TOKEN};
use bannergen::{BannerConfig, Color, ColorSpec, FontError, FontSpec, GenerateError, Generator};

// ============================================================================
// Output Layout
// ============================================================================

#[test]
fn standard_a_without_color_or_info() {
    let dir = TempDir::new().unwrap();
    let config = plain_config(dir.path(), "A");

    let path = Generator::new().generate(&config).unwrap();

    let expected = format!("\n{}\n", glyph_lines("standard", "A").join("\n"));
    assert_eq!(fs::read_to_string(path).unwrap(), expected);
}

#[test]
fn standard_a_in_red_is_wrapped_once() {
    let dir = TempDir::new().unwrap();
    let config = BannerConfig {
        color: ColorSpec::parse("red"),
        ..plain_config(dir.path(), "A")
    };

    let banner = Generator::new().compose(&config).unwrap();

    let expected = format!(
        "\n${{AnsiColor.RED}}{}${{AnsiColor.DEFAULT}}\n",
        glyph_lines("standard", "A").join("\n")
    );
    assert_eq!(banner.as_str(), expected);
}

#[test]
fn term_font_output_is_exact() {
    let dir = TempDir::new().unwrap();
    let config = BannerConfig {
        font: FontSpec::parse("term"),
        ..plain_config(dir.path(), "A")
    };

    let banner = Generator::new().compose(&config).unwrap();
    assert_eq!(banner.as_str(), "\nA\n");
}

#[test]
fn multi_line_text_keeps_one_color_region() {
    let dir = TempDir::new().unwrap();
    for color in Color::ALL {
        let config = BannerConfig {
            color: ColorSpec::Named(color),
            ..plain_config(dir.path(), "Hello World")
        };
        let banner = Generator::new().compose(&config).unwrap();

        assert_eq!(banner.as_str().matches(&color.open_token()).count(), 1);
        assert_eq!(banner.as_str().matches(RESET_TOKEN).count(), 1);
    }
}

#[test]
fn info_line_uses_project_version() {
    let dir = TempDir::new().unwrap();
    let config = BannerConfig {
        font: FontSpec::parse("term"),
        include_info: true,
        project_version: Some("2.5.0".to_string()),
        ..plain_config(dir.path(), "App")
    };

    let banner = Generator::new().compose(&config).unwrap();
    assert_eq!(
        banner.as_str(),
        "\nApp\nVersion: ${application.version:2.5.0}, Server: ${server.address:localhost}:${server.port:8080}, Active Profiles: ${spring.profiles.active:none}\n"
    );
}

#[test]
fn nbsp_output_has_no_ascii_spaces() {
    let dir = TempDir::new().unwrap();
    let plain = BannerConfig {
        include_info: true,
        ..plain_config(dir.path(), "Hi there")
    };
    let nbsp = BannerConfig {
        use_non_breaking_space: true,
        ..plain.clone()
    };

    let generator = Generator::new();
    let plain_banner = generator.compose(&plain).unwrap().into_string();
    let nbsp_banner = generator.compose(&nbsp).unwrap().into_string();

    assert!(!nbsp_banner.contains(' '));
    assert_eq!(nbsp_banner, plain_banner.replace(' ', "\u{00A0}"));
}

#[test]
fn empty_text_still_produces_separators() {
    let dir = TempDir::new().unwrap();
    let config = plain_config(dir.path(), "");

    let banner = Generator::new().compose(&config).unwrap();
    assert!(banner.as_str().starts_with('\n'));
    assert!(banner.as_str().ends_with('\n'));
    assert!(banner.as_str().trim().is_empty());
}

#[test]
fn stripped_output_is_already_normalized() {
    let lines = glyph_lines("standard", "Banner");
    assert_eq!(whitespace::strip_lines(&lines), lines);
}

// ============================================================================
// Fonts
// ============================================================================

#[test]
fn external_font_file_is_used() {
    let dir = TempDir::new().unwrap();
    let font = format!("file:{}", fixtures_dir().join("external.flf").display());
    let config = BannerConfig {
        font: FontSpec::parse(&font),
        ..plain_config(dir.path(), "ok")
    };

    let banner = Generator::new().compose(&config).unwrap();
    assert_eq!(banner.as_str(), "\nok\n");
}

#[test]
fn missing_external_font_names_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.flf");
    let config = BannerConfig {
        font: FontSpec::parse(&format!("file:{}", missing.display())),
        ..plain_config(dir.path(), "A")
    };

    let err = Generator::new().generate(&config).unwrap_err();
    match &err {
        GenerateError::Font(font_err @ FontError::ExternalNotFound { path, .. }) => {
            assert_eq!(path, &missing);
            assert!(font_err.is_not_found());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains(&missing.display().to_string()));
    assert!(!dir.path().join("banner.txt").exists());
}

#[test]
fn unknown_builtin_font_lists_available_fonts() {
    let dir = TempDir::new().unwrap();
    let config = BannerConfig {
        font: FontSpec::parse("gothic"),
        ..plain_config(dir.path(), "A")
    };

    let err = Generator::new().compose(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The built-in font \"gothic\" does not exist. Available fonts: standard, term."
    );
}

// ============================================================================
// Output Files
// ============================================================================

#[test]
fn missing_output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("target").join("classes");
    let config = BannerConfig {
        font: FontSpec::parse("term"),
        filename: "custom.txt".to_string(),
        ..plain_config(&out, "A")
    };

    let path = Generator::new().generate(&config).unwrap();

    assert_eq!(path, out.join("custom.txt"));
    assert_eq!(fs::read(&path).unwrap(), b"\nA\n");
}

#[test]
fn concurrent_runs_do_not_interfere() {
    let dir = TempDir::new().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let out = dir.path().join(format!("module-{}", i));
            thread::spawn(move || {
                let config = BannerConfig {
                    font: FontSpec::parse("term"),
                    ..plain_config(&out, &format!("m{}", i))
                };
                Generator::new().generate(&config).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let path = handle.join().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), format!("\nm{}\n", i));
    }
}
