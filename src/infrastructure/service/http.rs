#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart;
use serde_derive::Deserialize;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::DocService;
use crate::domain::models::SelectedFile;
use crate::domain::models::ServiceError;

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

async fn status_error(res: reqwest::Response) -> ServiceError {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|payload| return payload.error);

    return ServiceError::Status { status, detail };
}

pub struct HttpDocService {
    url: String,
    timeout: String,
    client: reqwest::Client,
}

impl Default for HttpDocService {
    fn default() -> HttpDocService {
        return HttpDocService::new(
            &Config::get(ConfigKey::ApiBaseUrl),
            &Config::get(ConfigKey::HealthCheckTimeout),
        );
    }
}

impl HttpDocService {
    pub fn new(url: &str, timeout: &str) -> HttpDocService {
        return HttpDocService {
            url: url.trim_end_matches('/').to_string(),
            timeout: timeout.to_string(),
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{url}/{path}", url = self.url);
    }
}

#[async_trait]
impl DocService for HttpDocService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("DocChat API base URL is not defined");
        }

        let res = self
            .client
            .get(self.endpoint(""))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "DocChat service is not reachable");
                bail!("DocChat service is not reachable");
            }
        };

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "DocChat service health check failed"
            );
            bail!("DocChat service health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn upload(&self, file: &SelectedFile) -> Result<(), ServiceError> {
        let payload = fs::read(&file.path).await?;
        tracing::debug!(name = file.name.as_str(), bytes = payload.len(), "Uploading document");

        let part = multipart::Part::bytes(payload)
            .file_name(file.name.to_string())
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("file", part);

        let res = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            let err = status_error(res).await;
            tracing::error!(error = %err, "Failed to upload document");
            return Err(err);
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        let form = multipart::Form::new().text("q", question.to_string());

        let res = self
            .client
            .post(self.endpoint("ask"))
            .multipart(form)
            .send()
            .await?;

        if !res.status().is_success() {
            let err = status_error(res).await;
            tracing::error!(error = %err, "Failed to ask question");
            return Err(err);
        }

        let body = res.text().await?;
        let payload = serde_json::from_str::<AskResponse>(&body).map_err(|err| {
            return ServiceError::MalformedBody(err.to_string());
        })?;
        tracing::debug!(body = ?payload, "Ask response");

        return Ok(payload.answer);
    }
}
