use checklist_shared::{
  Endpoints,
  TaskId,
  TaskView
};
use gloo::net::http::{
  Request,
  Response
};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),
  #[error("{url} answered with status {status}")]
  Status { status: u16, url: String },
  #[error("decode error: {0}")]
  Decode(String)
}

async fn get(
  url: &str
) -> Result<Response, ApiError> {
  let response = Request::get(url)
    .send()
    .await
    .map_err(|e| {
      ApiError::Network(e.to_string())
    })?;

  if !response.ok() {
    return Err(ApiError::Status {
      status: response.status(),
      url:    url.to_string()
    });
  }
  Ok(response)
}

async fn get_json<R>(
  url: &str
) -> Result<R, ApiError>
where
  R: DeserializeOwned
{
  get(url)
    .await?
    .json::<R>()
    .await
    .map_err(|e| {
      ApiError::Decode(e.to_string())
    })
}

#[tracing::instrument(skip(endpoints))]
pub async fn fetch_task(
  endpoints: &Endpoints,
  id: &TaskId
) -> Result<TaskView, ApiError> {
  get_json(&endpoints.task_detail_url(id))
    .await
}

/// Flips the completed flag server-side. The body is not read.
#[tracing::instrument(skip(endpoints))]
pub async fn toggle_task(
  endpoints: &Endpoints,
  id: &TaskId
) -> Result<(), ApiError> {
  get(&endpoints.toggle_url(id))
    .await
    .map(|_| ())
}
