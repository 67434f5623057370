use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::KeywordResults;
use crate::error::SearchError;
use crate::render;
use crate::search_client::SearchClient;

use super::models::{
    DoubleSearchInput, DoubleSearchResponse, ErrorBody, SearchForm, SearchRequest, SearchResponse,
};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        let (status, detail) = match &err {
            SearchError::EmptyKeyword => (StatusCode::BAD_REQUEST, "Keyword cannot be empty".to_string()),
            SearchError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Search API key not configured".to_string(),
            ),
            SearchError::Upstream { body, .. } => {
                (StatusCode::BAD_GATEWAY, format!("Search request failed: {body}"))
            }
            SearchError::Request(e) => (StatusCode::BAD_GATEWAY, format!("Search request failed: {e}")),
        };
        ApiError { status, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

pub async fn index_handler() -> Html<String> {
    Html(render::index_page(None, &[]))
}

pub async fn health_handler() -> &'static str {
    "ok"
}

/// Form submission: searches every non-blank keyword and renders the results page.
pub async fn search_page_handler(
    State(client): State<Arc<SearchClient>>,
    Query(form): Query<SearchForm>,
) -> (StatusCode, Html<String>) {
    let keywords = form.keywords();
    let entered = [form.keyword1.as_str(), form.keyword2.as_str()];

    if keywords.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(render::index_page(Some("Enter at least one keyword"), &entered)),
        );
    }

    match client.search_all(keywords.as_slice()).await {
        Ok(sections) => (StatusCode::OK, Html(render::results_page(&sections, &entered))),
        Err(e) => {
            let err = ApiError::from(e);
            tracing::warn!("search page failed: {}", err.detail);
            (err.status, Html(render::index_page(Some(&err.detail), &entered)))
        }
    }
}

pub async fn double_search_handler(
    State(client): State<Arc<SearchClient>>,
    Json(input): Json<DoubleSearchInput>,
) -> Result<Json<DoubleSearchResponse>, ApiError> {
    if input.keyword1.trim().is_empty() {
        return Err(ApiError::bad_request("keyword1 cannot be empty"));
    }
    if input.keyword2.trim().is_empty() {
        return Err(ApiError::bad_request("keyword2 cannot be empty"));
    }

    let sections = client.search_all(&[&input.keyword1, &input.keyword2]).await?;
    let [first, second]: [KeywordResults; 2] = sections.try_into().map_err(|_| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        detail: "Failed to fetch search results".to_string(),
    })?;

    Ok(Json(DoubleSearchResponse {
        keyword1: first.keyword,
        keyword1_results: first.results,
        keyword2: second.keyword,
        keyword2_results: second.results,
    }))
}

pub async fn search_handler(
    State(client): State<Arc<SearchClient>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();

    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Query cannot be empty"));
    }

    let results = client.search(&request.query).await?;

    let total_results = results.len();
    let processing_time_ms = start.elapsed().as_millis();

    Ok(Json(SearchResponse {
        query: request.query.trim().to_string(),
        results,
        total_results,
        processing_time_ms,
    }))
}

pub async fn openapi_handler() -> Json<Value> {
    let result_schema = json!({
        "type": "object",
        "properties": {
            "title": {"type": "string"},
            "link": {"type": "string"},
            "snippet": {"type": "string"}
        },
        "required": ["title", "link", "snippet"]
    });
    let error_schema = json!({
        "type": "object",
        "properties": {"detail": {"type": "string"}}
    });
    let errors = json!({
        "400": {"description": "Empty keyword", "content": {"application/json": {"schema": error_schema}}},
        "500": {"description": "Search API key not configured", "content": {"application/json": {"schema": error_schema}}},
        "502": {"description": "Search API request failed", "content": {"application/json": {"schema": error_schema}}}
    });
    let with_ok = |ok: Value| {
        let mut responses = errors.clone();
        responses["200"] = ok;
        responses
    };

    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Dual Search",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/double-search/": {
                "post": {
                    "summary": "Search two keywords and return the results for each",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {
                            "type": "object",
                            "properties": {
                                "keyword1": {"type": "string"},
                                "keyword2": {"type": "string"}
                            },
                            "required": ["keyword1", "keyword2"]
                        }}}
                    },
                    "responses": with_ok(json!({
                        "description": "Results per keyword",
                        "content": {"application/json": {"schema": {
                            "type": "object",
                            "properties": {
                                "keyword1": {"type": "string"},
                                "keyword1_results": {"type": "array", "items": result_schema},
                                "keyword2": {"type": "string"},
                                "keyword2_results": {"type": "array", "items": result_schema}
                            }
                        }}}
                    }))
                }
            },
            "/api/search": {
                "post": {
                    "summary": "Search a single query",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {
                            "type": "object",
                            "properties": {"query": {"type": "string"}},
                            "required": ["query"]
                        }}}
                    },
                    "responses": with_ok(json!({
                        "description": "Search results",
                        "content": {"application/json": {"schema": {
                            "type": "object",
                            "properties": {
                                "query": {"type": "string"},
                                "results": {"type": "array", "items": result_schema},
                                "total_results": {"type": "integer"},
                                "processing_time_ms": {"type": "integer"}
                            }
                        }}}
                    }))
                }
            }
        }
    }))
}
