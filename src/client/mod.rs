//! Native API Client
//!
//! reqwest-based transport used by the service modules and the CLI.
//!
//! - **ApiClient**: configured HTTP client with a cookie jar
//! - **SessionStore**: persists the session cookies between runs

mod http;
mod session;

pub use http::{ApiClient, REQUEST_ID_HEADER};
pub use session::SessionStore;

use std::path::Path;

use crate::error::ApiResult;
use crate::models::FileUpload;

/// Read a local image into an upload, taking the file name from the path
pub async fn load_upload(path: &Path) -> ApiResult<FileUpload> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());

    Ok(FileUpload::new(file_name, bytes))
}
