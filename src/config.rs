use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::{IslandError, Result};
use crate::grid::DEFAULT_LAND_THRESHOLD;

pub const DEFAULT_SIZE: usize = 50;
/// Largest accepted side length; keeps `size * size` cells allocatable.
pub const MAX_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// Percentage of cells drawn as land, 0 to 100.
    pub land_threshold: u32,
    /// Fixed seed for reproducible maps; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            land_threshold: DEFAULT_LAND_THRESHOLD,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: GridConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(IslandError::InvalidConfig("size must be at least 1".into()));
        }
        if self.size > MAX_SIZE {
            return Err(IslandError::InvalidConfig(format!(
                "size {} is above {}", self.size, MAX_SIZE
            )));
        }
        if self.land_threshold > 100 {
            return Err(IslandError::InvalidConfig(format!(
                "land_threshold {} is above 100", self.land_threshold
            )));
        }
        Ok(())
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
