// ABOUTME: Harbor v1 REST client built on reqwest with a cookie-backed session.
// ABOUTME: Logs in once, then lists projects, repositories and tags and deletes tags.

use super::api_path::ApiPath;
use super::error::RegistryError;
use super::models::{Project, Repository, Tag};
use super::RegistryOps;
use crate::config::RegistryConfig;
use crate::types::ProjectId;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

/// HTTP client for one Harbor instance.
pub struct HarborClient {
    http: Client,
    paths: ApiPath,
}

impl HarborClient {
    /// Build a client for the configured registry. No request is sent yet.
    pub fn new(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let url = Url::parse(&config.url).map_err(|e| RegistryError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(RegistryError::UnsupportedScheme(other.to_string())),
        }

        let http = Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .user_agent(concat!("harbor-job/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            paths: ApiPath::new(url.as_str(), config.version),
        })
    }

    /// Establish a session.
    ///
    /// Pings the API first so the registry can hand out its initial cookies,
    /// then posts the credentials to the login form. The session cookie stays
    /// in the client's cookie store for every later call.
    pub async fn login(&self, user: &str, password: &str) -> Result<(), RegistryError> {
        self.send(self.request(Method::GET, &self.paths.ping())).await?;

        tracing::debug!(user, version = %self.paths.version(), "logging in to registry");
        self.send(
            self.request(Method::POST, &self.paths.login())
                .form(&[("principal", user), ("password", password)]),
        )
        .await?;

        tracing::info!(user, "registry session established");
        Ok(())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, url, "registry request");
        self.http.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RegistryError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!(status = status.as_u16(), "registry returned an error status");
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        Err(RegistryError::Status {
            url,
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }

    /// Harbor answers `null` instead of `[]` for empty collections.
    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Vec<T>, RegistryError> {
        let response = self.send(request).await?;
        let items: Option<Vec<T>> = response.json().await?;
        Ok(items.unwrap_or_default())
    }
}

#[async_trait]
impl RegistryOps for HarborClient {
    async fn list_projects(&self) -> Result<Vec<Project>, RegistryError> {
        self.fetch_list(self.request(Method::GET, &self.paths.projects())).await
    }

    async fn list_repositories(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Repository>, RegistryError> {
        let request = self
            .request(Method::GET, &self.paths.repositories())
            .query(&[("project_id", project.value())]);
        self.fetch_list(request).await
    }

    async fn list_tags(&self, repository: &str) -> Result<Vec<Tag>, RegistryError> {
        self.fetch_list(self.request(Method::GET, &self.paths.tags(repository))).await
    }

    async fn delete_tag(&self, repository: &str, tag: &str) -> Result<(), RegistryError> {
        self.send(self.request(Method::DELETE, &self.paths.tag(repository, tag))).await?;
        Ok(())
    }
}
