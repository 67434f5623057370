use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No Title";
pub const NO_LINK: &str = "#";
pub const NO_SNIPPET: &str = "No Description";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// All results returned for a single keyword, in provider order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct KeywordResults {
    pub keyword: String,
    pub results: Vec<SearchResult>,
}

/// The subset of the Serper response body we read.
#[derive(Deserialize, Debug, Default)]
pub struct ProviderResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OrganicResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl From<OrganicResult> for SearchResult {
    fn from(result: OrganicResult) -> Self {
        SearchResult {
            title: result.title.unwrap_or_else(|| NO_TITLE.to_string()),
            link: result.link.unwrap_or_else(|| NO_LINK.to_string()),
            snippet: result.snippet.unwrap_or_else(|| NO_SNIPPET.to_string()),
        }
    }
}

impl ProviderResponse {
    pub fn into_results(self, max_results: usize) -> Vec<SearchResult> {
        self.organic
            .into_iter()
            .take(max_results)
            .map(SearchResult::from)
            .collect()
    }
}
