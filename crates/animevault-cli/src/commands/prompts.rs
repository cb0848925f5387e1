use anime_vault_sources::SearchResult;
use color_eyre::Result;
use dialoguer::{Confirm, Select};

/// Prompt for yes/no confirmation before a destructive operation
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Pick one search result by title, returning its index
pub fn select_result(results: &[SearchResult]) -> Result<usize> {
    let labels: Vec<String> = results
        .iter()
        .map(|r| {
            let title = r.title.as_deref().unwrap_or("(untitled)");
            match r.media_type.as_deref() {
                Some(kind) => format!("{} ({})", title, kind),
                None => title.to_string(),
            }
        })
        .collect();

    Select::new()
        .with_prompt("Which result should be imported?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}
