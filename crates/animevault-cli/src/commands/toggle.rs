use crate::commands::{open_store, report_warning};
use crate::output::Output;
use color_eyre::Result;

pub async fn run_toggle(id: String, output: &Output) -> Result<()> {
    let mut store = open_store()?;

    match store.toggle_read(&id) {
        Ok(toggled) => {
            report_warning(toggled.warning, output);
            output.success(format!(
                "\"{}\" marked as {}",
                toggled.value.title,
                toggled.value.status.as_str()
            ));
            Ok(())
        }
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}
