pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod render;
pub mod search_client;
