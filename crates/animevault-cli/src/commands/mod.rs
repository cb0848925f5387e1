pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod prompts;
pub mod remove;
pub mod search;
pub mod stats;
pub mod toggle;

use crate::output::Output;
use anime_vault_config::{Config, PathManager};
use anime_vault_core::{PersistenceWarning, VaultFile, VaultStore};
use color_eyre::Result;

/// Open the store backed by the platform vault file
pub(crate) fn open_store() -> Result<VaultStore> {
    let path_manager = PathManager::default();
    let file = VaultFile::from_paths(&path_manager)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to prepare vault file: {}", e))?;
    tracing::debug!("opening vault at {:?}", file.path());
    Ok(VaultStore::open(file))
}

/// Load the config file, falling back to defaults when absent
pub(crate) fn load_config() -> Result<Config> {
    let path_manager = PathManager::default();
    Config::load_or_default(&path_manager.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))
}

/// Durable write failed but the in-memory change stuck; tell the user
pub(crate) fn report_warning(warning: Option<PersistenceWarning>, output: &Output) {
    if let Some(warning) = warning {
        output.warn(warning.to_string());
    }
}

/// Display-only truncation; stored descriptions always keep the full text
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 100), "short");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        let long = "a".repeat(150);
        let cut = truncate(&long, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        let text = "あいうえお";
        assert_eq!(truncate(text, 3), "あいう...");
    }
}
