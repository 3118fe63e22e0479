//! `tgtypes.toml` loading and merging with command-line flags.
//!
//! Precedence is flag, then config file, then built-in default. Relative
//! paths in the config file are resolved against the file's directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use tgtypes_core::GeneratorConfig;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "tgtypes.toml";
/// Published schema used when neither a URL nor a file is configured.
pub(crate) const DEFAULT_SCHEMA_URL: &str = "https://ark0f.github.io/tg-bot-api/custom.min.json";
const DEFAULT_OUT_DIR: &str = "generated";
const DEFAULT_EXTENSION: &str = "d.ts";

/// Where the schema comes from, shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SourceArgs {
    /// Configuration file [default: ./tgtypes.toml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Fetch the schema from this URL
    #[arg(long, value_name = "URL", conflicts_with = "schema_file")]
    pub schema_url: Option<String>,
    /// Read the schema from a local file
    #[arg(long, value_name = "PATH")]
    pub schema_file: Option<PathBuf>,
}

/// Output options for commands that produce declaration files.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct OutputArgs {
    /// Directory the declaration files are written to
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    /// Prefix for object interfaces and their enum unions
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
    /// File extension of the generated files
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
    /// Fail when the schema references undeclared objects
    #[arg(long)]
    pub strict: bool,
}

/// Contents of `tgtypes.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub schema_url: Option<String>,
    pub schema_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub object_prefix: Option<String>,
    pub extension: Option<String>,
    pub strict: Option<bool>,
}

impl FileConfig {
    /// Load `explicit`, or `tgtypes.toml` under `cwd` when it exists.
    ///
    /// Returns the parsed file along with the directory its relative paths
    /// are resolved against.
    pub(crate) fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, PathBuf), String> {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => {
                let path = cwd.join(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    debug!(path = %path.display(), "No config file found, using defaults.");
                    return Ok((Self::default(), cwd.to_path_buf()));
                }
                path
            }
        };

        let contents = fs::read_to_string(&path)
            .map_err(|err| format!("Failed to read config file {}: {err}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|err| format!("Failed to parse config file {}: {err}", path.display()))?;
        debug!(path = %path.display(), "Loaded config file.");

        let base = path
            .parent()
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
        Ok((config, base))
    }
}

/// Location of the schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSource::Url(url) => f.write_str(url),
            SchemaSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved options for one run.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub source: SchemaSource,
    pub out_dir: PathBuf,
    pub extension: String,
    pub strict: bool,
    pub generator: GeneratorConfig,
}

impl Settings {
    /// Merge flags over the config file over defaults.
    pub(crate) fn resolve(
        source: &SourceArgs,
        output: &OutputArgs,
        cwd: &Path,
    ) -> Result<Self, String> {
        let (file, base) = FileConfig::load(source.config.as_deref(), cwd)?;

        let schema_source = if let Some(path) = &source.schema_file {
            SchemaSource::File(cwd.join(path))
        } else if let Some(url) = &source.schema_url {
            SchemaSource::Url(url.clone())
        } else if let Some(path) = &file.schema_file {
            SchemaSource::File(base.join(path))
        } else if let Some(url) = &file.schema_url {
            SchemaSource::Url(url.clone())
        } else {
            SchemaSource::Url(DEFAULT_SCHEMA_URL.to_string())
        };

        let out_dir = match (&output.out_dir, &file.out_dir) {
            (Some(dir), _) => cwd.join(dir),
            (None, Some(dir)) => base.join(dir),
            (None, None) => cwd.join(DEFAULT_OUT_DIR),
        };

        let extension = output
            .extension
            .clone()
            .or(file.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let extension = extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err("File extension must not be empty".to_string());
        }

        let mut generator = GeneratorConfig::default();
        if let Some(prefix) = output.prefix.clone().or(file.object_prefix) {
            generator.object_prefix = prefix;
        }

        let settings = Self {
            source: schema_source,
            out_dir,
            extension,
            strict: output.strict || file.strict.unwrap_or(false),
            generator,
        };
        debug!(
            source = %settings.source,
            out_dir = %settings.out_dir.display(),
            extension = %settings.extension,
            strict = settings.strict,
            "Resolved settings."
        );
        Ok(settings)
    }
}
