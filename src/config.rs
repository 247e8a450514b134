//! Banner configuration.
//!
//! A [`BannerConfig`] is built once per invocation from layered
//! [`BannerOverrides`] (config file, then command line) on top of the
//! defaults, plus the [`ProjectInfo`] read from a Cargo manifest.

use crate::banner::ColorSpec;
use crate::font::FontSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output filename.
pub const DEFAULT_FILENAME: &str = "banner.txt";

/// Default info line template.
pub const DEFAULT_INFO: &str = "Version: ${application.version:${project.version}}, \
Server: ${server.address:localhost}:${server.port:8080}, \
Active Profiles: ${spring.profiles.active:none}";

/// Build output directory, relative to the project root.
pub const BUILD_OUTPUT_DIR: &str = "target";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "banner.toml";

/// Default Cargo manifest looked up in the working directory.
pub const DEFAULT_MANIFEST_FILE: &str = "Cargo.toml";

/// Errors that can occur while assembling the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Manifest {} has no [package] section", .path.display())]
    Manifest { path: PathBuf },

    #[error("No banner text given and no project name available")]
    MissingText,
}

/// All parameters for one banner generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    /// Text rendered as glyph art
    pub text: String,
    /// Directory the banner file is written to
    pub output_directory: PathBuf,
    /// Banner filename inside `output_directory`
    pub filename: String,
    /// Append the info line
    pub include_info: bool,
    /// Info line template; `None` means no info line
    pub info: Option<String>,
    pub font: FontSpec,
    pub color: ColorSpec,
    /// Replace spaces with U+00A0 in the output
    pub use_non_breaking_space: bool,
    /// Substituted for `${project.version}` in the info template
    pub project_version: Option<String>,
}

impl BannerConfig {
    /// Defaults for the given text, writing to `target/banner.txt`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            output_directory: PathBuf::from(BUILD_OUTPUT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
            include_info: true,
            info: Some(DEFAULT_INFO.to_string()),
            font: FontSpec::default(),
            color: ColorSpec::Default,
            use_non_breaking_space: false,
            project_version: None,
        }
    }

    /// Resolve layered overrides into a full configuration.
    ///
    /// `project` supplies the default text and the version; `project_root`
    /// anchors the default output directory.
    pub fn resolve(
        overrides: BannerOverrides,
        project: Option<&ProjectInfo>,
        project_root: &Path,
    ) -> Result<Self, ConfigError> {
        let text = overrides
            .text
            .or_else(|| project.map(|p| p.name.clone()))
            .ok_or(ConfigError::MissingText)?;

        let mut config = Self::new(text);
        config.output_directory = overrides
            .output_directory
            .unwrap_or_else(|| project_root.join(BUILD_OUTPUT_DIR));
        if let Some(filename) = overrides.filename {
            config.filename = filename;
        }
        if let Some(include_info) = overrides.include_info {
            config.include_info = include_info;
        }
        if let Some(info) = overrides.info {
            config.info = Some(info);
        }
        if let Some(font) = overrides.font {
            config.font = FontSpec::parse(&font);
        }
        if let Some(color) = overrides.color {
            config.color = ColorSpec::parse(&color);
        }
        if let Some(nbsp) = overrides.use_non_breaking_space {
            config.use_non_breaking_space = nbsp;
        }
        config.project_version = project.and_then(|p| p.version.clone());
        Ok(config)
    }
}

/// One configuration layer; unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BannerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_non_breaking_space: Option<bool>,
}

impl BannerOverrides {
    /// Layer `upper` on top of `self`; fields set in `upper` win.
    pub fn merge(self, upper: BannerOverrides) -> Self {
        Self {
            text: upper.text.or(self.text),
            output_directory: upper.output_directory.or(self.output_directory),
            filename: upper.filename.or(self.filename),
            include_info: upper.include_info.or(self.include_info),
            info: upper.info.or(self.info),
            font: upper.font.or(self.font),
            color: upper.color.or(self.color),
            use_non_breaking_space: upper.use_non_breaking_space.or(self.use_non_breaking_space),
        }
    }

    /// Parse the `[banner]` table of a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.banner)
    }

    /// Load the `[banner]` table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// On-disk config file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    banner: BannerOverrides,
}

/// Project metadata used for default text and version templating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    /// `None` when the version is inherited from a workspace
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    version: Option<toml::Value>,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Parse `[package]` from Cargo manifest contents.
    pub fn from_manifest_str(content: &str) -> Result<Option<Self>, toml::de::Error> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest.package.map(|package| Self {
            name: package.name,
            version: match package.version {
                Some(toml::Value::String(version)) => Some(version),
                _ => None,
            },
        }))
    }

    /// Read `[package]` from a Cargo manifest file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&content)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
            .ok_or_else(|| ConfigError::Manifest {
                path: path.to_path_buf(),
            })
    }
}
