//! HTTP client for the external dictionary service.

pub mod api;

pub use api::{DictionaryApi, DictionaryApiError};
