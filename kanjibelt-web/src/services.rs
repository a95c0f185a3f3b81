//! Backend clients: the handwriting judge and the score ranking.
//!
//! Both endpoints are plain JSON-over-POST. The clients carry a base URL so
//! deployments behind a path prefix keep working.

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Request(#[from] gloo::net::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

/// Judge request: the round target plus the rendered board image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeRequest {
    pub target_kanji: String,
    pub image_data_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeResponse {
    pub ok: bool,
    #[serde(default)]
    pub recognized: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub user_name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub score_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: u32,
    pub user_name: String,
    pub score: u32,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RankingsResponse {
    #[serde(default)]
    pub rankings: Vec<RankingEntry>,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone)]
pub struct JudgeClient {
    base_url: String,
}

impl JudgeClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Ask the judge whether the rendered board reads as the target.
    ///
    /// # Errors
    /// Fails on transport errors and non-2xx statuses.
    pub async fn judge(&self, request: &JudgeRequest) -> Result<JudgeResponse, ServiceError> {
        let response = Request::post(&format!("{}/api/judge", self.base_url))
            .json(request)?
            .send()
            .await?;
        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl Default for JudgeClient {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, Clone)]
pub struct RankingClient {
    base_url: String,
}

impl RankingClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Submit a finished session's score under the player's name.
    ///
    /// # Errors
    /// Fails on transport errors and non-2xx statuses.
    pub async fn submit(
        &self,
        submission: &ScoreSubmission,
    ) -> Result<ScoreSubmitResponse, ServiceError> {
        let response = Request::post(&format!("{}/api/scores", self.base_url))
            .json(submission)?
            .send()
            .await?;
        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Fetch the current top scores.
    ///
    /// # Errors
    /// Fails on transport errors and non-2xx statuses.
    pub async fn rankings(&self) -> Result<RankingsResponse, ServiceError> {
        let response = Request::get(&format!("{}/api/rankings", self.base_url))
            .send()
            .await?;
        if !response.ok() {
            return Err(ServiceError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

impl Default for RankingClient {
    fn default() -> Self {
        Self::new("")
    }
}
