//! Configuration of [`MinefieldEnv`](super::MinefieldEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`MinefieldEnv`](super::MinefieldEnv).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct MinefieldEnvConfig {
    /// The maximum number of mines placed at reset.
    ///
    /// The realized count may be smaller, see
    /// [`World::generate`](crate::World::generate).
    pub max_mines: usize,

    /// The number of steps after which an episode is cut off.
    pub max_steps: usize,

    /// Side length of the square arena, centered at the origin.
    pub width: f64,
}

impl Default for MinefieldEnvConfig {
    fn default() -> Self {
        Self {
            max_mines: 10,
            max_steps: 200,
            width: 200.0,
        }
    }
}

impl MinefieldEnvConfig {
    /// Sets the maximum number of mines.
    pub fn max_mines(mut self, v: usize) -> Self {
        self.max_mines = v;
        self
    }

    /// Sets the step limit of an episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Sets the side length of the arena.
    pub fn width(mut self, v: f64) -> Self {
        self.width = v;
        self
    }

    /// Constructs [`MinefieldEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`MinefieldEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MinefieldEnvConfig;
    use anyhow::Result;
    use tempdir::TempDir;

    #[test]
    fn test_serde_env_config() -> Result<()> {
        let config = MinefieldEnvConfig::default()
            .max_mines(5)
            .max_steps(100)
            .width(50.0);

        let dir = TempDir::new("minefield_env_config")?;
        let path = dir.path().join("env_config.yaml");
        config.save(&path)?;
        let config_ = MinefieldEnvConfig::load(&path)?;
        assert_eq!(config, config_);

        Ok(())
    }
}
