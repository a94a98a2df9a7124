use std::collections::HashMap;
use std::path::Path;

use ::config::{Config, File, FileFormat};
use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::config::currency_profile::CurrencyProfile;
use crate::error;
use crate::formatters::format_descriptor::FormatDescriptor;

/// Currency profiles keyed by upper-case currency code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_currency: Option<String>,
    #[serde(default)]
    pub currencies: HashMap<String, CurrencyProfile>,
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file_path = path.as_ref().to_string_lossy();

        let settings = Config::builder()
            .add_source(File::new(&file_path, FileFormat::Toml))
            .build()
            .context("Failed to read settings file")?;

        let settings: Settings = settings
            .try_deserialize()
            .context("Failed to parse settings file")?;

        let settings = settings
            .normalized()
            .context("Invalid currency in settings file")?;

        info!(
            "Loaded {} currency profiles from {}",
            settings.currencies.len(),
            file_path
        );
        Ok(settings)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("Failed to parse settings")?;
        settings
            .normalized()
            .context("Invalid currency in settings")
    }

    pub fn profile(&self, currency: &str) -> Option<&CurrencyProfile> {
        self.currencies.get(&currency.to_uppercase())
    }

    pub fn default_profile(&self) -> Option<&CurrencyProfile> {
        self.default_currency
            .as_deref()
            .and_then(|currency| self.profile(currency))
    }

    /// Picks the format to render with: `custom` if given, else the profile of
    /// `currency`, else the configured default currency, else US dollars.
    pub fn resolve(
        &self,
        custom: Option<&FormatDescriptor>,
        currency: Option<&str>,
    ) -> FormatDescriptor {
        custom
            .or_else(|| currency.and_then(|c| self.profile(c)).map(|p| &p.format))
            .or_else(|| self.default_profile().map(|p| &p.format))
            .cloned()
            .unwrap_or_default()
    }

    fn normalized(self) -> error::Result<Self> {
        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, profile)| (code.to_uppercase(), profile))
            .collect::<HashMap<_, _>>();

        for profile in currencies.values() {
            profile.format.validate()?;
        }

        Ok(Self {
            default_currency: self.default_currency.map(|c| c.to_uppercase()),
            currencies,
        })
    }
}
