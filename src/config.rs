//! Board configuration parsed from environment variables.

use crate::options::Options;
use crate::theme::Theme;

pub const THEME_VAR: &str = "GEOBOARD_THEME";
pub const ANGLE_RADIUS_VAR: &str = "GEOBOARD_ANGLE_RADIUS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown GEOBOARD_THEME: {0}")]
    UnknownTheme(String),
    #[error("invalid number for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("theme does not fit the options shape: {0}")]
    Theme(#[from] serde_json::Error),
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTheme(_) => "E_UNKNOWN_THEME",
            Self::InvalidNumber { .. } => "E_INVALID_NUMBER",
            Self::Theme(_) => "E_THEME",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoardConfig {
    pub theme: Theme,
    /// Overrides `options.angle.radius` when set.
    pub angle_radius: Option<f64>,
}

impl BoardConfig {
    /// Build typed board config from environment variables.
    ///
    /// Optional:
    /// - `GEOBOARD_THEME`: `default` (default) or `gui`
    /// - `GEOBOARD_ANGLE_RADIUS`: positive number overriding the angle radius
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown theme name or a radius that is not a
    /// positive finite number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let theme = parse_theme(&std::env::var(THEME_VAR).unwrap_or_default())?;
        let angle_radius = parse_radius(&std::env::var(ANGLE_RADIUS_VAR).unwrap_or_default())?;
        Ok(Self { theme, angle_radius })
    }

    /// Build config from values already read elsewhere, such as parsed
    /// command-line flags. The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Same as [`BoardConfig::from_env`].
    pub fn from_values(theme: Option<&str>, angle_radius: Option<f64>) -> Result<Self, ConfigError> {
        let theme = parse_theme(theme.unwrap_or_default())?;
        let angle_radius = angle_radius.map(check_radius).transpose()?;
        Ok(Self { theme, angle_radius })
    }

    /// Effective options: defaults, then theme, then the radius override.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be merged onto the defaults.
    pub fn options(&self) -> Result<Options, ConfigError> {
        let mut options = self.theme.apply(&Options::default())?;
        if let Some(radius) = self.angle_radius {
            options.angle.radius = radius;
        }
        Ok(options)
    }
}

/// Parse a theme name. Empty selects the default theme.
///
/// # Errors
///
/// Returns `UnknownTheme` for names other than `default` and `gui`.
pub fn parse_theme(raw: &str) -> Result<Theme, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Theme::Default);
    }
    raw.parse().map_err(ConfigError::UnknownTheme)
}

/// Parse a radius override. Empty means no override.
///
/// # Errors
///
/// Returns `InvalidNumber` unless the value is a positive finite number.
pub fn parse_radius(raw: &str) -> Result<Option<f64>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(r) => check_radius(r).map(Some),
        Err(_) => Err(ConfigError::InvalidNumber { var: ANGLE_RADIUS_VAR, value: raw.to_string() }),
    }
}

/// Accept `radius` if it is a positive finite number.
///
/// # Errors
///
/// Returns `InvalidNumber` otherwise.
pub fn check_radius(radius: f64) -> Result<f64, ConfigError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ConfigError::InvalidNumber { var: ANGLE_RADIUS_VAR, value: radius.to_string() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
