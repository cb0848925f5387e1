use crate::commands::{open_store, prompts, report_warning};
use crate::output::Output;
use color_eyre::Result;

pub async fn run_clear(yes: bool, output: &Output) -> Result<()> {
    let mut store = open_store()?;

    if store.is_empty() {
        output.info("The vault is already empty");
        return Ok(());
    }

    if !yes
        && !prompts::confirm(&format!(
            "Remove all {} entries? This cannot be undone",
            store.len()
        ))?
    {
        output.info("Nothing cleared");
        return Ok(());
    }

    let cleared = store.clear();
    report_warning(cleared.warning, output);
    output.success(format!("All data cleared ({} entries removed)", cleared.value));
    Ok(())
}
