use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::BoundaryPolicy;

/// Window size used when neither the command line nor a config file sets one.
pub const DEFAULT_WINDOW_SIZE: u32 = 50;

/// Number of per-sample records shown for each site in a window listing.
pub const DEFAULT_PREVIEW: usize = 5;

///
/// Scan settings, loadable from a TOML file:
///
/// ```toml
/// window_size = 100
/// slide = 50
/// boundary = "clamp"
/// parallel = true
/// ```
///
/// Every key is optional and falls back to its default.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub window_size: u32,
    pub slide: Option<u32>,
    pub boundary: BoundaryPolicy,
    pub parallel: bool,
    pub progress: bool,
    pub preview: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            slide: None,
            boundary: BoundaryPolicy::default(),
            parallel: false,
            progress: false,
            preview: DEFAULT_PREVIEW,
        }
    }
}

#[derive(Error, Debug)]
pub enum ScanConfigError {
    #[error("Invalid scan parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ScanConfigResult<T> = std::result::Result<T, ScanConfigError>;

impl ScanConfig {
    pub fn validate(&self) -> ScanConfigResult<()> {
        if self.window_size == 0 {
            return Err(ScanConfigError::InvalidParameter(
                "window_size must be greater than 0".to_string(),
            ));
        }
        if self.slide == Some(0) {
            return Err(ScanConfigError::InvalidParameter(
                "slide must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&Path> for ScanConfig {
    type Error = ScanConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: ScanConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/scan.toml");
        let config = ScanConfig::try_from(path.as_path()).unwrap();

        assert_eq!(
            config,
            ScanConfig {
                window_size: 100,
                slide: Some(50),
                boundary: BoundaryPolicy::Clamp,
                parallel: true,
                progress: false,
                preview: 2,
            }
        );
    }

    #[rstest]
    fn test_partial_toml_uses_defaults() {
        let path = PathBuf::from("../tests/data/config/partial.toml");
        let config = ScanConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.window_size, 25);
        assert_eq!(config.slide, None);
        assert_eq!(config.boundary, BoundaryPolicy::Faithful);
        assert_eq!(config.preview, DEFAULT_PREVIEW);
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/config/missing.toml");
        let result = ScanConfig::try_from(path.as_path());
        assert!(matches!(result, Err(ScanConfigError::Io(_))));
    }

    #[rstest]
    #[case("window_size = 0")]
    #[case("slide = 0")]
    fn test_zero_values_rejected(#[case] toml_str: &str) {
        let config: ScanConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ScanConfigError::InvalidParameter(_))
        ));
    }

    #[rstest]
    #[case("boundary = \"sideways\"")]
    #[case("window = 50")]
    fn test_bad_keys_rejected(#[case] toml_str: &str) {
        assert!(toml::from_str::<ScanConfig>(toml_str).is_err());
    }

    #[rstest]
    fn test_default_window_size() {
        assert_eq!(ScanConfig::default().window_size, 50);
        assert!(ScanConfig::default().validate().is_ok());
    }
}
