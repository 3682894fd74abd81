use serde::Serialize;

/// Body returned by a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
