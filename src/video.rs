//! Long-running video generation.
//!
//! Video generation is the one asynchronous job in the API: submit once,
//! receive an opaque operation handle, then poll the handle at a fixed
//! interval until it reaches a terminal state. The job never moves back to
//! pending once done, and its outcome is consumed exactly once.
//!
//! The result URI the provider returns is short-lived and requires the
//! credential as a query parameter; it is fetched exactly once and the
//! bytes are handed back as a locally-owned [`MediaArtifact`]. The remote
//! URI itself is never exposed to callers.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::artifact::MediaArtifact;
use crate::client::GeminiClient;
use crate::error::Error;
use crate::Result;

/// Status of a long-running generation job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Submitted, not yet terminal.
    Pending,
    /// Terminal. Successful jobs carry a result URI; failed jobs may carry
    /// a provider error message.
    Done {
        uri: Option<String>,
        error: Option<String>,
    },
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done { .. })
    }
}

/// One in-flight video generation request.
///
/// Created on submit, driven Pending → Done exactly once by status polls,
/// and discarded after its outcome is consumed. Nothing is persisted: a job
/// in flight when the process exits is abandoned.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    id: String,
    status: JobStatus,
}

impl GenerationJob {
    pub(crate) fn submitted(id: String) -> Self {
        Self {
            id,
            status: JobStatus::Pending,
        }
    }

    /// Provider-assigned operation handle (opaque).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> &JobStatus {
        &self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_terminal()
    }

    /// Fold one observed status into the job.
    ///
    /// A terminal job ignores further observations: once done, the status
    /// never reverts and the outcome is set exactly once.
    pub(crate) fn absorb(&mut self, observed: JobStatus) {
        if self.status.is_terminal() {
            return;
        }
        if observed.is_terminal() {
            tracing::info!(job = %self.id, "video job reached terminal state");
        }
        self.status = observed;
    }
}

/// Extract the operation handle from a submit response.
fn operation_name(body: &Value) -> Result<String> {
    body.get("name")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| Error::service(format!("submit response carried no operation name: {body}")))
}

/// Read a job status out of an operation resource.
///
/// Lenient on the success shape: the API has shipped the result URI both as
/// `response.generateVideoResponse.generatedSamples[0].video.uri` and as
/// `response.generatedVideos[0].video.uri`.
fn status_from_operation(body: &Value) -> JobStatus {
    let done = body.get("done").and_then(|v| v.as_bool()).unwrap_or(false);
    if !done {
        return JobStatus::Pending;
    }

    let uri = body
        .pointer("/response/generateVideoResponse/generatedSamples/0/video/uri")
        .or_else(|| body.pointer("/response/generatedVideos/0/video/uri"))
        .and_then(|v| v.as_str())
        .map(String::from);
    let error = body
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .map(String::from);

    JobStatus::Done { uri, error }
}

/// Source of job status observations.
///
/// Seam between the poll loop and the network so the loop's state machine
/// and attempt accounting are testable without a live provider.
#[async_trait]
pub(crate) trait JobStatusSource: Sync {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus>;
}

#[async_trait]
impl JobStatusSource for GeminiClient {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        let body = self.get_json(&self.operation_url(job_id)).await?;
        Ok(status_from_operation(&body))
    }
}

/// Drive a job to a terminal state by fixed-interval polling.
///
/// Sleeps for `interval` before every status query, so N pending polls plus
/// the terminal one take at least (N + 1) × interval. `max_attempts` bounds
/// the loop; exhausting it is a retryable [`Error::Service`], since the
/// provider never produced a terminal answer.
pub(crate) async fn drive_to_completion<S: JobStatusSource + ?Sized>(
    source: &S,
    job: &mut GenerationJob,
    interval: Duration,
    max_attempts: u32,
) -> Result<()> {
    let mut attempts = 0u32;
    while !job.is_done() {
        if attempts >= max_attempts {
            return Err(Error::service(format!(
                "video job {} still pending after {} status polls",
                job.id(),
                attempts
            )));
        }
        tokio::time::sleep(interval).await;
        attempts += 1;
        tracing::debug!(job = %job.id(), attempt = attempts, "polling video job");
        let observed = source.job_status(job.id()).await?;
        job.absorb(observed);
    }
    Ok(())
}

impl GeminiClient {
    /// Generate a video for the prompt.
    ///
    /// Blocks (cooperatively) through the whole submit/poll/fetch protocol
    /// and returns locally-owned bytes that survive provider URL expiry and
    /// can be saved without re-authenticating. There is no cancellation:
    /// once started, the call runs to completion or failure.
    pub async fn generate_video(&self, prompt: &str) -> Result<MediaArtifact> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "numberOfVideos": 1 },
        });

        let url = self.model_url(&self.config().video_model, "predictLongRunning");
        let submit = self.post_json(&url, &body).await?;

        let mut job = GenerationJob::submitted(operation_name(&submit)?);
        // The submit response is itself an operation resource and may
        // already be terminal.
        job.absorb(status_from_operation(&submit));
        tracing::info!(job = %job.id(), "video job submitted");

        drive_to_completion(
            self,
            &mut job,
            self.config().poll_interval,
            self.config().max_poll_attempts,
        )
        .await?;

        let uri = match job.status() {
            JobStatus::Done { uri: Some(uri), .. } => uri.clone(),
            JobStatus::Done { uri: None, error } => {
                if let Some(message) = error {
                    tracing::warn!(job = %job.id(), message, "video job failed");
                }
                return Err(Error::Generation(
                    "Video generation failed or no URI returned".into(),
                ));
            }
            JobStatus::Pending => unreachable!("poll loop exits only on terminal status"),
        };

        let bytes = self.fetch_bytes(&uri).await?;
        Ok(MediaArtifact::new(bytes, "video/mp4"))
    }
}
