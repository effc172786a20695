//! Environment-file loader

use std::path::PathBuf;

use adorn_core::constants::DEFAULT_ENV_FILENAME;
use anyhow::Result;
use tracing::debug;

use crate::{expand, map::EnvMap, parse};

/// Loader that handles reading an environment file at startup.
///
/// `load` returns the mapping explicitly for callers to pass along;
/// `load_and_apply` additionally writes it into the process environment for
/// dotenv-style consumers, honoring the override policy.
pub struct Loader {
    /// File to read, relative to the working directory
    path: PathBuf,
    /// Whether loaded values replace existing process variables
    override_existing: bool,
    /// Whether `${VAR}` references in values are expanded
    expand: bool,
}

impl Loader {
    /// Create a loader for the default `.env` file
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ENV_FILENAME),
            override_existing: true,
            expand: true,
        }
    }

    /// Set the file to load from
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set whether loaded values replace existing process variables
    #[must_use]
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Set whether `${VAR}` references are expanded
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Load the file into an [`EnvMap`]
    pub fn load(&self) -> Result<EnvMap> {
        let map = parse::parse_file(&self.path)?;
        let map = if self.expand {
            expand::expand(&map)
        } else {
            map
        };
        debug!(
            path = %self.path.display(),
            count = map.len(),
            "loaded environment file"
        );
        Ok(map)
    }

    /// Load the file and write it into the process environment
    pub fn load_and_apply(&self) -> Result<EnvMap> {
        let map = self.load()?;
        map.apply(self.override_existing);
        Ok(map)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_and_expands_a_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gcp.env");
        fs::write(
            &path,
            "GCP_PROJECT_ID=demo\nSTORAGE_BUCKET_NAME=${GCP_PROJECT_ID}-assets\n",
        )
        .unwrap();

        let env = Loader::new().path(&path).load().unwrap();
        assert_eq!(env.get("GCP_PROJECT_ID"), Some("demo"));
        assert_eq!(env.get("STORAGE_BUCKET_NAME"), Some("demo-assets"));
    }

    #[test]
    fn expansion_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "A=x\nB=${A}\n").unwrap();

        let env = Loader::new().path(&path).expand(false).load().unwrap();
        assert_eq!(env.get("B"), Some("${A}"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.env");
        let err = Loader::new().path(&path).load().unwrap_err();
        assert!(err.to_string().contains("absent.env"));
    }

    #[test]
    fn apply_honors_the_loader_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "ADORN_TEST_LOADER_KEY=file\n").unwrap();

        std::env::set_var("ADORN_TEST_LOADER_KEY", "process");
        Loader::new()
            .path(&path)
            .override_existing(false)
            .load_and_apply()
            .unwrap();
        assert_eq!(
            std::env::var("ADORN_TEST_LOADER_KEY").as_deref(),
            Ok("process")
        );

        Loader::new().path(&path).load_and_apply().unwrap();
        assert_eq!(
            std::env::var("ADORN_TEST_LOADER_KEY").as_deref(),
            Ok("file")
        );
        std::env::remove_var("ADORN_TEST_LOADER_KEY");
    }
}
