use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::schema::{
    common::BadRequestResponse,
    person::{PersonCreateRequest, PersonResponse, PersonUpdateRequest},
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}: {reason}")]
    Rejected { status: u16, reason: String },
}

/// Operations the client needs from the people service.
#[allow(async_fn_in_trait)]
pub trait PeopleApi {
    async fn list(&self) -> Result<Vec<PersonResponse>, ApiError>;
    async fn create(&self, request: &PersonCreateRequest) -> Result<PersonResponse, ApiError>;
    async fn update(
        &self,
        id: i32,
        request: &PersonUpdateRequest,
    ) -> Result<PersonResponse, ApiError>;
    async fn delete(&self, id: i32) -> Result<(), ApiError>;
}

pub struct HttpPeopleApi {
    client: Client,
    base_url: String,
}

impl HttpPeopleApi {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn people_url(&self) -> String {
        format!("{}/people", self.base_url)
    }

    fn person_url(&self, id: i32) -> String {
        format!("{}/people/{}", self.base_url, id)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    Err(rejection(status, resp).await)
}

async fn rejection(status: StatusCode, resp: Response) -> ApiError {
    let body = resp.text().await.unwrap_or_default();
    let reason = match serde_json::from_str::<BadRequestResponse>(&body) {
        Ok(val) => val.error,
        Err(_) => body,
    };
    ApiError::Rejected {
        status: status.as_u16(),
        reason,
    }
}

impl PeopleApi for HttpPeopleApi {
    async fn list(&self) -> Result<Vec<PersonResponse>, ApiError> {
        let resp = self.client.get(self.people_url()).send().await?;
        read_json(resp).await
    }

    async fn create(&self, request: &PersonCreateRequest) -> Result<PersonResponse, ApiError> {
        let resp = self
            .client
            .post(self.people_url())
            .json(request)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn update(
        &self,
        id: i32,
        request: &PersonUpdateRequest,
    ) -> Result<PersonResponse, ApiError> {
        let resp = self
            .client
            .put(self.person_url(id))
            .json(request)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let resp = self.client.delete(self.person_url(id)).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(rejection(status, resp).await)
    }
}
