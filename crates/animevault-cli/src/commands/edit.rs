use crate::commands::{open_store, report_warning};
use crate::output::Output;
use anime_vault_models::{EntryPatch, WatchStatus};
use color_eyre::Result;

pub async fn run_edit(
    id: String,
    title: Option<String>,
    status: Option<WatchStatus>,
    poster: Option<String>,
    genres: Option<String>,
    description: Option<String>,
    output: &Output,
) -> Result<()> {
    if title.is_none()
        && status.is_none()
        && poster.is_none()
        && genres.is_none()
        && description.is_none()
    {
        output.warn("Nothing to change. Pass at least one of --title, --status, --poster, --genres, --description");
        return Ok(());
    }

    let mut store = open_store()?;

    let patch = EntryPatch {
        title,
        poster_url: poster,
        status,
        genres,
        description,
    };

    match store.update(&id, patch) {
        Ok(updated) => {
            report_warning(updated.warning, output);
            output.success(format!("\"{}\" updated", updated.value.title));
            Ok(())
        }
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}
