// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration.

use alloc::string::{String, ToString};
use core::fmt;

/// Where a widget mirrors its displayed value as a tooltip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TitleChange {
    /// Leave the text wrapper's title alone.
    Off,
    /// Use the displayed text.
    #[default]
    Text,
    /// Use the selected option's own `title`.
    Title,
}

/// Texts of the file widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileConfig {
    /// Shown while no file is chosen.
    pub default_text: String,
    /// Tooltip of the clear button.
    pub clear_title: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_text: "Please select a file...".to_string(),
            clear_title: "Clear!".to_string(),
        }
    }
}

/// Options applied when an element is turned into a widget.
///
/// Build one with [`Config::builder`], or use `Config::default()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Wire `label[for=id]` clicks and hover to the widget.
    pub use_label: bool,
    /// Add an overlay element inside the text wrapper.
    pub use_overlay: bool,
    /// Re-fire focus, blur, click and change between the wrapper and the
    /// inner controls.
    pub forward_events: bool,
    /// File widget texts.
    pub file: FileConfig,
    /// Tooltip mirroring.
    pub title_change_to: TitleChange,
    /// Option tooltips use the option text instead of its title.
    pub option_title_from_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_label: true,
            use_overlay: true,
            forward_events: true,
            file: FileConfig::default(),
            title_change_to: TitleChange::Text,
            option_title_from_text: true,
        }
    }
}

impl Config {
    /// A builder starting from the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
///
/// ```rust
/// use overstory_plastic::{Config, TitleChange};
///
/// let config = Config::builder()
///     .use_overlay(false)
///     .title_change_to(TitleChange::Off)
///     .file_default_text("Choose...")
///     .build()
///     .unwrap();
/// assert!(!config.use_overlay);
/// assert_eq!(config.file.default_text, "Choose...");
///
/// assert!(Config::builder().file_clear_title("  ").build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets [`Config::use_label`].
    #[must_use]
    pub fn use_label(mut self, on: bool) -> Self {
        self.config.use_label = on;
        self
    }

    /// Sets [`Config::use_overlay`].
    #[must_use]
    pub fn use_overlay(mut self, on: bool) -> Self {
        self.config.use_overlay = on;
        self
    }

    /// Sets [`Config::forward_events`].
    #[must_use]
    pub fn forward_events(mut self, on: bool) -> Self {
        self.config.forward_events = on;
        self
    }

    /// Sets [`FileConfig::default_text`].
    #[must_use]
    pub fn file_default_text(mut self, text: &str) -> Self {
        self.config.file.default_text = text.to_string();
        self
    }

    /// Sets [`FileConfig::clear_title`].
    #[must_use]
    pub fn file_clear_title(mut self, title: &str) -> Self {
        self.config.file.clear_title = title.to_string();
        self
    }

    /// Sets [`Config::title_change_to`].
    #[must_use]
    pub fn title_change_to(mut self, to: TitleChange) -> Self {
        self.config.title_change_to = to;
        self
    }

    /// Sets [`Config::option_title_from_text`].
    #[must_use]
    pub fn option_title_from_text(mut self, on: bool) -> Self {
        self.config.option_title_from_text = on;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.config.file.default_text.trim().is_empty() {
            return Err(ConfigError::BlankText("file.default_text"));
        }
        if self.config.file.clear_title.trim().is_empty() {
            return Err(ConfigError::BlankText("file.clear_title"));
        }
        Ok(self.config)
    }
}

/// A configuration value was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The named text setting is empty or whitespace.
    BlankText(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankText(field) => write!(f, "`{field}` must not be blank"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert!(c.use_label && c.use_overlay && c.forward_events);
        assert!(c.option_title_from_text);
        assert_eq!(c.title_change_to, TitleChange::Text);
        assert_eq!(c.file.default_text, "Please select a file...");
        assert_eq!(c.file.clear_title, "Clear!");
        assert_eq!(Config::builder().build(), Ok(c));
    }

    #[test]
    fn blank_texts_are_rejected() {
        assert_eq!(
            Config::builder().file_default_text("").build(),
            Err(ConfigError::BlankText("file.default_text"))
        );
        let err = Config::builder().file_clear_title(" \t").build().unwrap_err();
        assert_eq!(err.to_string(), "`file.clear_title` must not be blank");
    }
}
