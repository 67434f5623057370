use serde::{Deserialize, Serialize};

use crate::data_models::SearchResult;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
    pub processing_time_ms: u128,
}

#[derive(Debug, Deserialize)]
pub struct DoubleSearchInput {
    pub keyword1: String,
    pub keyword2: String,
}

#[derive(Debug, Serialize)]
pub struct DoubleSearchResponse {
    pub keyword1: String,
    pub keyword1_results: Vec<SearchResult>,
    pub keyword2: String,
    pub keyword2_results: Vec<SearchResult>,
}

/// Query string submitted by the HTML form. Either field may be missing or blank.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub keyword1: String,
    #[serde(default)]
    pub keyword2: String,
}

impl SearchForm {
    pub fn keywords(&self) -> Vec<&str> {
        [self.keyword1.trim(), self.keyword2.trim()]
            .into_iter()
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
