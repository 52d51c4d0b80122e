//! Default locations of the settings file and the word store.
//!
//! Settings live under the platform config dir
//! (`~/.config/word-annotator/settings.toml` on Linux), stored words under
//! the local data dir (`~/.local/share/word-annotator/words.json`).

use std::path::PathBuf;

const APP_DIR: &str = "word-annotator";

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub settings_file: PathBuf,
    pub store_file: PathBuf,
}

impl AppPaths {
    /// Resolve both paths; the current directory stands in for a platform
    /// directory that cannot be determined.
    pub fn new() -> Self {
        let under = |base: Option<PathBuf>, file: &str| {
            base.unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join(file)
        };

        Self {
            settings_file: under(dirs::config_dir(), "settings.toml"),
            store_file: under(dirs::data_local_dir(), "words.json"),
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
