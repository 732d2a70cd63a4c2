//! Layered configuration for the kundali tools.
//!
//! Resolution order for the file: explicit path (`--config`), then the
//! `KUNDALI_CONFIG` environment variable, then built-in defaults. Every key
//! is optional; a missing key keeps its default.
//!
//! ```toml
//! [defaults]
//! ayanamsha = "lahiri"
//!
//! [dasha]
//! horizon_years = 100.0
//!
//! [transits.orbs]
//! conjunction = 8.0
//! opposition = 8.0
//! trine = 6.0
//! square = 6.0
//! sextile = 4.0
//!
//! [ephemeris]
//! min_year = 1800
//! max_year = 2200
//! speed_step_days = 0.5
//!
//! [logging]
//! filter = "info"
//! ```

pub mod error;

use std::path::{Path, PathBuf};

use kundali_core::EphemerisConfig;
use kundali_vedic_base::{
    AspectOrbs, AyanamshaSystem, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "KUNDALI_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub ayanamsha: AyanamshaSystem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashaSettings {
    /// Years of mahadashas generated from birth.
    pub horizon_years: f64,
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitSettings {
    pub orbs: AspectOrbs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    pub defaults: Defaults,
    pub dasha: DashaSettings,
    pub transits: TransitSettings,
    pub ephemeris: EphemerisConfig,
    pub logging: LoggingSettings,
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Environment(PathBuf),
    Defaults,
}

impl KundaliConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve from an explicit path, else `KUNDALI_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve_with(explicit, env.as_deref())
    }

    /// [`Self::resolve`] with the environment value passed in.
    pub fn resolve_with(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }
        match env_path {
            Some(path) if !path.as_os_str().is_empty() => {
                Ok((Self::load(path)?, ConfigSource::Environment(path.to_path_buf())))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Reject values no computation can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let horizon = self.dasha.horizon_years;
        if !horizon.is_finite() || horizon <= 0.0 || horizon > MAX_HORIZON_YEARS {
            return Err(ConfigError::Invalid(format!(
                "dasha.horizon_years must be in (0, {MAX_HORIZON_YEARS}], got {horizon}"
            )));
        }
        self.transits
            .orbs
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("transits.orbs: {e}")))?;
        self.ephemeris
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("ephemeris: {e}")))?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".into()));
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_defaults() {
        let c = KundaliConfig::from_toml_str("").unwrap();
        assert_eq!(c, KundaliConfig::default());
        assert_eq!(c.defaults.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.dasha.horizon_years, 100.0);
        assert_eq!(c.transits.orbs.sextile, 4.0);
        assert_eq!(c.logging.filter, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let c = KundaliConfig::from_toml_str(
            r#"
            [defaults]
            ayanamsha = "raman"

            [transits.orbs]
            trine = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(c.defaults.ayanamsha, AyanamshaSystem::Raman);
        assert_eq!(c.transits.orbs.trine, 5.0);
        assert_eq!(c.transits.orbs.conjunction, 8.0);
        assert_eq!(c.ephemeris, EphemerisConfig::default());
    }

    #[test]
    fn rejects_non_positive_horizon() {
        let err = KundaliConfig::from_toml_str("[dasha]\nhorizon_years = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_oversized_horizon() {
        let err = KundaliConfig::from_toml_str("[dasha]\nhorizon_years = 1000000.0\n").unwrap_err();
        assert!(err.to_string().contains("horizon_years"));
        assert!(KundaliConfig::from_toml_str("[dasha]\nhorizon_years = 360.0\n").is_ok());
    }

    #[test]
    fn rejects_zero_orb() {
        let err = KundaliConfig::from_toml_str("[transits.orbs]\nsquare = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn rejects_inverted_years() {
        let text = "[ephemeris]\nmin_year = 2100\nmax_year = 2000\n";
        assert!(KundaliConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = KundaliConfig::from_toml_str("[dasha]\nhorizon = 50.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let mut c = KundaliConfig::default();
        c.dasha.horizon_years = 80.0;
        c.logging.filter = "kundali_chart=debug".into();
        let text = c.to_toml_string().unwrap();
        assert_eq!(KundaliConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn no_path_resolves_to_defaults() {
        let (c, source) = KundaliConfig::resolve_with(None, None).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(c, KundaliConfig::default());
        let (_, source) = KundaliConfig::resolve_with(None, Some(Path::new(""))).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = KundaliConfig::resolve_with(None, Some(Path::new("/nonexistent/kundali.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
