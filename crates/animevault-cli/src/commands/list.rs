use crate::commands::{open_store, truncate};
use crate::output::{Output, OutputFormat};
use anime_vault_core::{view, SortKey};
use anime_vault_models::WatchStatus;
use color_eyre::Result;

const DESCRIPTION_DISPLAY_CHARS: usize = 100;

pub async fn run_list(
    status: Option<WatchStatus>,
    sort: Option<SortKey>,
    output: &Output,
) -> Result<()> {
    let store = open_store()?;
    let entries = view::sorted(&view::filtered(store.entries(), status), sort);

    if entries.is_empty() {
        output.info("No entries to show. Add one with `animevault add` or `animevault import`");
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => {
            let mut table =
                output.new_table(&["Id", "Title", "Status", "Genres", "Added", "Description"]);
            for entry in &entries {
                table.add_row(vec![
                    entry.id.clone(),
                    entry.title.clone(),
                    entry.status.as_str().to_string(),
                    entry.genres.join(", "),
                    entry.date_added.format("%Y-%m-%d").to_string(),
                    truncate(&entry.description, DESCRIPTION_DISPLAY_CHARS),
                ]);
            }

            output.println(table.to_string());
            output.println(format!(
                "{} of {} entries shown",
                entries.len(),
                store.len()
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(&entries)?);
        }
    }

    Ok(())
}
