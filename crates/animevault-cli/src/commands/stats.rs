use crate::commands::open_store;
use crate::output::{Output, OutputFormat};
use anime_vault_core::view;
use color_eyre::Result;

pub async fn run_stats(output: &Output) -> Result<()> {
    let store = open_store()?;
    let stats = view::stats(store.entries());

    match output.format() {
        OutputFormat::Human => {
            let mut table = output.new_table(&["Status", "Count"]);
            table.add_row(vec!["Total".to_string(), stats.total.to_string()]);
            table.add_row(vec!["Completed".to_string(), stats.completed.to_string()]);
            table.add_row(vec!["Ongoing".to_string(), stats.ongoing.to_string()]);
            table.add_row(vec![
                "Plan to watch".to_string(),
                stats.plan_to_watch.to_string(),
            ]);
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(stats)?);
        }
    }

    Ok(())
}
