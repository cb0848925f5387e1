use crate::commands::{load_config, open_store, prompts, report_warning, truncate};
use crate::output::{Output, OutputFormat};
use anime_vault_core::import_result;
use anime_vault_sources::{search_anime, SearchResult, API_BASE};
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SYNOPSIS_DISPLAY_CHARS: usize = 150;

pub async fn run_search(query: String, limit: Option<u32>, output: &Output) -> Result<()> {
    let results = fetch_results(&query, limit, output).await?;

    if results.is_empty() {
        output.info("No results found. Try searching with different keywords");
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => {
            let mut table =
                output.new_table(&["#", "Title", "Type", "Score", "Episodes", "Synopsis"]);
            for (i, result) in results.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    result.title.as_deref().unwrap_or("(untitled)").to_string(),
                    result.media_type.as_deref().unwrap_or("-").to_string(),
                    result
                        .score
                        .map(|s| format!("{:.2}", s))
                        .unwrap_or_else(|| "-".to_string()),
                    result
                        .episodes
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    truncate(
                        result.synopsis.as_deref().unwrap_or(""),
                        SYNOPSIS_DISPLAY_CHARS,
                    ),
                ]);
            }

            output.println(table.to_string());
            output.println("Import one with `animevault import <query> --pick <#>`");
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let items: Vec<serde_json::Value> = results
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "malId": r.mal_id,
                        "title": r.title,
                        "imageUrl": r.image_url,
                        "synopsis": r.synopsis,
                        "airingStatus": r.airing_status,
                        "episodes": r.episodes,
                        "score": r.score,
                        "genres": r.genres,
                        "type": r.media_type,
                    })
                })
                .collect();
            output.json(&serde_json::Value::Array(items));
        }
    }

    Ok(())
}

pub async fn run_import(
    query: String,
    pick: Option<usize>,
    limit: Option<u32>,
    output: &Output,
) -> Result<()> {
    let results = fetch_results(&query, limit, output).await?;

    if results.is_empty() {
        output.warn("No results found, nothing to import");
        return Ok(());
    }

    let index = match pick {
        Some(n) if (1..=results.len()).contains(&n) => n - 1,
        Some(n) => {
            output.error(format!(
                "--pick {} is out of range (1-{})",
                n,
                results.len()
            ));
            std::process::exit(1);
        }
        None => prompts::select_result(&results)?,
    };

    let mut store = open_store()?;
    match import_result(&mut store, &results[index]) {
        Ok(imported) => {
            report_warning(imported.warning, output);
            output.success(format!(
                "\"{}\" added to your vault (id {})",
                imported.value.title, imported.value.id
            ));
            Ok(())
        }
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}

async fn fetch_results(
    query: &str,
    limit: Option<u32>,
    output: &Output,
) -> Result<Vec<SearchResult>> {
    let config = load_config()?;
    let limit = limit.unwrap_or(config.search.limit);
    let api_base = config.search.api_base.as_deref().unwrap_or(API_BASE);

    let spinner = if output.format() == OutputFormat::Human && !output.is_quiet() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("static spinner template"),
        );
        pb.set_message(format!("Searching for \"{}\"...", query));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let client = reqwest::Client::new();
    let results = search_anime(&client, api_base, query, limit).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match results {
        Ok(results) => Ok(results),
        Err(e) => {
            output.error(e.to_string());
            std::process::exit(1);
        }
    }
}
