use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{BrowserError, Result};
use crate::presenter::FileIcon;

const OPTIONS_FILE: &str = "options.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BrowserOptions {
    /// Icon used for directory rows in this browsing context
    #[serde(default)]
    pub folder_icon: FileIcon,
    #[serde(default = "default_sort_after_load")]
    pub sort_after_load: bool,
    /// Group the console listing into "Directories" and "Files" sections
    #[serde(default)]
    pub show_separators: bool,
}

fn default_sort_after_load() -> bool {
    true
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            folder_icon: FileIcon::Folder,
            sort_after_load: true,
            show_separators: false,
        }
    }
}

impl BrowserOptions {
    pub fn load_options() -> Self {
        let Some(config_dir) = Self::get_config_dir() else {
            return Self::default();
        };
        let options_file = config_dir.join(OPTIONS_FILE);
        if !options_file.exists() {
            return Self::default();
        }
        match Self::load_from(&options_file) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error reading options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn store_options(&self) {
        let Some(config_dir) = Self::get_config_dir() else {
            return;
        };
        if let Err(err) = self.store_to(&config_dir.join(OPTIONS_FILE)) {
            log::error!("Error writing options file: {}", err);
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)?;
        toml::from_str(&txt).map_err(|err| BrowserError::Options {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn store_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self).map_err(|err| BrowserError::Options {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Returns the configuration directory path, creating it if needed
    pub fn get_config_dir() -> Option<PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("com", "GitHub", "icy_browse")?;
        let dir = proj_dirs.config_dir().to_path_buf();
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            log::error!("Can't create configuration directory {:?}", dir);
            return None;
        }
        Some(dir)
    }
}
