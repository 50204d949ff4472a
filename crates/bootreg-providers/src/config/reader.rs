//! Configuration reader plugin
//!
//! Looks for `<path>/<file_name>.<ext>` for each extension of the
//! configured format, then `<path>/<file_name>` as given. The document is
//! parsed once; decoding the named section into a caller's value happens
//! through the same parsed document.
//!
//! File access is local and is never retried.
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Default, Deserialize)]
//! struct Release { version: String, level: String }
//!
//! let mut release = Release::default();
//! Registry::with_plugins([with_config_target(
//!     ConfigReaderOptions::new("./", "config", "yaml", "release"),
//!     &mut release,
//! )])?;
//! ```

use crate::constants::PLUGIN_NAME_CONFIG_READER;
use bootreg_domain::error::{Error, Result};
use bootreg_domain::value_objects::{ConfigFormat, ConfigReaderOptions};
use bootreg_infrastructure::di::{ConfigReader, Plugin, Registry};
use bootreg_infrastructure::error_ext::ErrorContext;
use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use figment::value::Dict;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

type Decode<'t> = Box<dyn FnOnce(&ConfigReader, &str) -> Result<()> + 't>;

/// Configuration reader plugin
///
/// Populates the configuration slot of the registry and, when built with
/// [`ConfigReaderPlugin::decode_into`], writes the decoded section into
/// the caller's value.
pub struct ConfigReaderPlugin<'t> {
    options: ConfigReaderOptions,
    decode: Option<Decode<'t>>,
}

impl<'t> ConfigReaderPlugin<'t> {
    /// Create a plugin that only stores the reader
    pub fn new(options: ConfigReaderOptions) -> Self {
        Self {
            options,
            decode: None,
        }
    }

    /// Decode the configured section into `target` while applying
    pub fn decode_into<T>(mut self, target: &'t mut T) -> Self
    where
        T: DeserializeOwned + 't,
    {
        self.decode = Some(Box::new(move |reader: &ConfigReader, section: &str| {
            *target = reader.extract_section(section)?;
            Ok(())
        }));
        self
    }

    /// Options this plugin reads with
    pub fn options(&self) -> &ConfigReaderOptions {
        &self.options
    }

    /// Locate, read and parse the configured file
    pub fn load(&self) -> Result<ConfigReader> {
        let format = self.options.format()?;
        let path = locate_config_file(&self.options.path, &self.options.file_name, format)?;
        debug!(path = %path.display(), %format, "Reading configuration file");

        let contents = fs::read_to_string(&path)
            .io_context(format!("Failed to read config file {}", path.display()))?;

        let figment = match format {
            ConfigFormat::Yaml => Figment::from(Yaml::string(&contents)),
            ConfigFormat::Json => Figment::from(Json::string(&contents)),
            ConfigFormat::Toml => Figment::from(Toml::string(&contents)),
        };

        // Surface syntax errors here rather than on first lookup
        figment
            .extract::<Dict>()
            .with_config_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(ConfigReader::new(figment, path, format))
    }
}

impl Plugin for ConfigReaderPlugin<'_> {
    fn name(&self) -> &str {
        PLUGIN_NAME_CONFIG_READER
    }

    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()> {
        let this = *self;
        let reader = this.load()?;
        let section = this.options.section.as_str();

        match this.decode {
            Some(decode) => decode(&reader, section)?,
            None if !section.is_empty() && !reader.contains(section) => {
                return Err(Error::configuration(format!(
                    "Section '{}' not found in {}",
                    section,
                    reader.source_path().display()
                )));
            }
            None => {}
        }

        registry.set_config(reader);
        Ok(())
    }
}

/// Box a [`ConfigReaderPlugin`] that only stores the reader
pub fn with_config_reader(options: ConfigReaderOptions) -> Box<dyn Plugin> {
    Box::new(ConfigReaderPlugin::new(options))
}

/// Box a [`ConfigReaderPlugin`] that also decodes the section into `target`
pub fn with_config_target<'t, T>(
    options: ConfigReaderOptions,
    target: &'t mut T,
) -> Box<dyn Plugin + 't>
where
    T: DeserializeOwned + 't,
{
    Box::new(ConfigReaderPlugin::new(options).decode_into(target))
}

/// First existing file for `file_name` in `dir`
pub fn locate_config_file(dir: &Path, file_name: &str, format: ConfigFormat) -> Result<PathBuf> {
    format
        .extensions()
        .iter()
        .map(|ext| dir.join(format!("{}.{}", file_name, ext)))
        .chain(std::iter::once(dir.join(file_name)))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            Error::not_found(format!(
                "{} config file '{}' in {}",
                format,
                file_name,
                dir.display()
            ))
        })
}
