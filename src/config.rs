use std::{fs, path::Path};

use log::info;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Window settings, usually read from a TOML file:
///
/// ```toml
/// max_length = 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    /// Number of samples kept in the window
    pub max_length: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { max_length: 10 }
    }
}

impl WindowConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded window config from '{}' ({} samples)",
            path.display(),
            config.max_length
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;
    use crate::{Error, MovingAverage};

    #[test]
    fn test_parse() {
        let config = WindowConfig::from_toml_str("max_length = 4").unwrap();
        assert_eq!(config, WindowConfig { max_length: 4 });

        let average = MovingAverage::<f64>::from_config(config).unwrap();
        assert_eq!(average.max_len(), 4);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            WindowConfig::from_toml_str("max_length = -1"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            WindowConfig::from_toml_str("max_length = 4\nweights = [1, 2]"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            WindowConfig::from_toml_str(""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_zero_length_config() {
        let config = WindowConfig::from_toml_str("max_length = 0").unwrap();
        assert!(matches!(
            MovingAverage::<i32>::from_config(config),
            Err(Error::ZeroCapacity)
        ));
    }

    #[test]
    fn test_load() {
        let path = env::temp_dir().join(format!("moving_average_{}.toml", process::id()));
        fs::write(&path, "max_length = 12\n").unwrap();
        let config = WindowConfig::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap().max_length, 12);
        assert!(matches!(
            WindowConfig::load(path.with_extension("missing")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_round_trip_default() {
        let text = toml::to_string(&WindowConfig::default()).unwrap();
        assert_eq!(WindowConfig::from_toml_str(&text).unwrap().max_length, 10);
    }
}
