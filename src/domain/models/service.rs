use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::SelectedFile;
use super::ServiceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

#[async_trait]
pub trait DocService {
    /// Used at startup to report whether the service can be reached. The
    /// result is informational only, requests are attempted regardless.
    async fn health_check(&self) -> Result<()>;

    /// Sends a document for ingestion. The response body is ignored.
    async fn upload(&self, file: &SelectedFile) -> Result<(), ServiceError>;

    /// Asks a question about the ingested document and returns the answer
    /// text.
    async fn ask(&self, question: &str) -> Result<String, ServiceError>;
}

pub type DocServiceArc = Arc<dyn DocService + Send + Sync>;
