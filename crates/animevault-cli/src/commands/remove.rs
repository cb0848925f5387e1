use crate::commands::{open_store, prompts, report_warning};
use crate::output::Output;
use color_eyre::Result;

pub async fn run_delete(id: String, yes: bool, output: &Output) -> Result<()> {
    let mut store = open_store()?;

    // Deleting is irreversible; confirm against the real title first
    if !yes {
        let title = match store.get(&id) {
            Some(entry) => entry.title.clone(),
            None => {
                output.error(format!("no entry with id {}", id));
                std::process::exit(1);
            }
        };
        if !prompts::confirm(&format!("Delete \"{}\"? This cannot be undone", title))? {
            output.info("Nothing deleted");
            return Ok(());
        }
    }

    match store.delete(&id) {
        Ok(removed) => {
            report_warning(removed.warning, output);
            output.success(format!("\"{}\" deleted", removed.value.title));
            Ok(())
        }
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}
