use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

// Jikan API base URL (unofficial MyAnimeList API)
pub const API_BASE: &str = "https://api.jikan.moe/v4";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode search response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct JikanSearchResponse {
    #[serde(default)]
    data: Vec<JikanAnime>,
}

#[derive(Debug, Deserialize)]
struct JikanAnime {
    mal_id: Option<u64>,
    title: Option<String>,
    images: Option<JikanImages>,
    synopsis: Option<String>,
    status: Option<String>,
    episodes: Option<u32>,
    score: Option<f32>,
    #[serde(default)]
    genres: Vec<JikanGenre>,
    #[serde(rename = "type")]
    media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanImages {
    jpg: Option<JikanImageSet>,
}

#[derive(Debug, Deserialize)]
struct JikanImageSet {
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JikanGenre {
    name: String,
}

/// One candidate record from search. Every field may be absent; the import
/// adapter decides what is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub mal_id: Option<u64>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub synopsis: Option<String>,
    pub airing_status: Option<String>,
    pub episodes: Option<u32>,
    pub score: Option<f32>,
    pub genres: Vec<String>,
    pub media_type: Option<String>,
}

impl From<JikanAnime> for SearchResult {
    fn from(anime: JikanAnime) -> Self {
        let image_url = anime
            .images
            .and_then(|i| i.jpg)
            .and_then(|j| j.image_url);
        SearchResult {
            mal_id: anime.mal_id,
            title: anime.title,
            image_url,
            synopsis: anime.synopsis,
            airing_status: anime.status,
            episodes: anime.episodes,
            score: anime.score,
            genres: anime.genres.into_iter().map(|g| g.name).collect(),
            media_type: anime.media_type,
        }
    }
}

/// Query the anime database by text, returning at most `limit` candidates
pub async fn search_anime(
    client: &Client,
    api_base: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<SearchResult>, SearchError> {
    let url = format!(
        "{}/anime?q={}&limit={}",
        api_base,
        urlencoding::encode(query),
        limit
    );
    debug!("searching: {}", url);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::Status { status, body });
    }

    let body: JikanSearchResponse = response.json().await.map_err(SearchError::Decode)?;
    debug!("search returned {} results", body.data.len());
    Ok(body.data.into_iter().map(SearchResult::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_record() {
        let json = r#"{
            "data": [{
                "mal_id": 20,
                "title": "Naruto",
                "images": { "jpg": { "image_url": "https://cdn.myanimelist.net/images/anime/13/17405.jpg" } },
                "synopsis": "Moments prior to Naruto Uzumaki's birth...",
                "status": "Finished Airing",
                "episodes": 220,
                "score": 8.01,
                "genres": [{ "name": "Action" }, { "name": "Adventure" }],
                "type": "TV"
            }]
        }"#;

        let parsed: JikanSearchResponse = serde_json::from_str(json).unwrap();
        let result = SearchResult::from(parsed.data.into_iter().next().unwrap());

        assert_eq!(result.mal_id, Some(20));
        assert_eq!(result.title.as_deref(), Some("Naruto"));
        assert_eq!(
            result.image_url.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/13/17405.jpg")
        );
        assert_eq!(result.episodes, Some(220));
        assert_eq!(result.genres, vec!["Action", "Adventure"]);
        assert_eq!(result.media_type.as_deref(), Some("TV"));
    }

    #[test]
    fn test_tolerates_absent_fields() {
        let json = r#"{ "data": [{ "mal_id": 1 }] }"#;
        let parsed: JikanSearchResponse = serde_json::from_str(json).unwrap();
        let result = SearchResult::from(parsed.data.into_iter().next().unwrap());

        assert_eq!(result.mal_id, Some(1));
        assert!(result.title.is_none());
        assert!(result.image_url.is_none());
        assert!(result.genres.is_empty());
    }

    #[test]
    fn test_tolerates_empty_response() {
        let parsed: JikanSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.data.is_empty());
    }
}
