use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("taskpad")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TaskpadConfig {
    pub data_directory: PathBuf,
    pub debug_logging: bool,
}

impl Default for TaskpadConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
            debug_logging: false,
        }
    }
}

impl TaskpadConfig {
    /// The static seed document the store is initialized from.
    pub fn tasks_path(&self) -> PathBuf {
        self.data_directory.join("tasks.json")
    }

    /// Ensure the data directory and seed document exist.
    pub fn ensure_files(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)?;

        let path = self.tasks_path();
        if !path.exists() {
            std::fs::write(&path, "[]\n")?;
        }

        Ok(())
    }
}
