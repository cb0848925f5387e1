pub mod jikan;

pub use jikan::{search_anime, SearchError, SearchResult, API_BASE};
