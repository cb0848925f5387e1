use crate::commands::{open_store, report_warning};
use crate::output::Output;
use anime_vault_models::{NewEntry, WatchStatus};
use color_eyre::Result;

pub async fn run_add(
    title: String,
    status: WatchStatus,
    poster: Option<String>,
    genres: Option<String>,
    description: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut store = open_store()?;

    let candidate = NewEntry {
        title,
        poster_url: poster.unwrap_or_default(),
        status: Some(status),
        genres: genres.unwrap_or_default(),
        description: description.unwrap_or_default(),
        external_id: None,
        external_kind: None,
    };

    match store.insert(candidate) {
        Ok(added) => {
            report_warning(added.warning, output);
            output.success(format!(
                "\"{}\" added to your vault (id {})",
                added.value.title, added.value.id
            ));
            Ok(())
        }
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}
