//! Configuration loading functionality.
//!
//! This module provides loading of an [`EngineConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Sections and fields omitted from the file keep their defaults, so a
    /// minimal file only has to name what it overrides.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it is not valid YAML for
    /// the configuration schema.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shop_hr_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/default.yaml")?;
    /// # Ok::<(), shop_hr_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
