use std::fmt::Display;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Method, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::Config,
    error::{Error, Result},
    traits::{self, JsonModel},
    types::{Author, Book, Id},
};

/// Paths of the Library API resources.
pub mod paths {
    use crate::types::Id;

    pub fn authors() -> String {
        "/api/authors".into()
    }

    pub fn author(id: Id) -> String {
        format!("/api/authors/{id}")
    }

    pub fn books(author: Id) -> String {
        format!("/api/authors/{author}/books")
    }

    pub fn book(author: Id, book: Id) -> String {
        format!("/api/authors/{author}/books/{book}")
    }

    pub fn author_collections() -> String {
        "/api/authorcollections".into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Xml,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One request against the Library API.
///
/// Bodies are always JSON bytes; `content_type` only sets the declared
/// `Content-Type` header, which the service is probed with independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method:       Method,
    pub path:         String,
    pub body:         Option<String>,
    pub content_type: MediaType,
    pub accept:       Option<MediaType>,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
            content_type: MediaType::Json,
            accept: None,
        }
    }

    pub fn get(path: String) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: String) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post(path: String, body: &impl JsonModel) -> Result<Self> {
        Ok(Self {
            body: Some(body.to_json()?),
            ..Self::new(Method::POST, path)
        })
    }

    pub fn content_type(mut self, content_type: MediaType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn accept(mut self, accept: MediaType) -> Self {
        self.accept = Some(accept);
        self
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Raw response. The status is the contract; the body is decoded on demand.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status:       StatusCode,
    pub content_type: Option<String>,
    pub body:         String,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        traits::decode(&self.body)
    }

    pub fn expect_status(self, expected: StatusCode) -> Result<Self> {
        if self.status != expected {
            return Err(Error::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.body,
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct LibraryClient {
    http: reqwest::Client,
    base: Url,
}

impl LibraryClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Self::with_http(&config.base_url, http)
    }

    fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::Url(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::Url(base_url.to_string()));
        }
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|_| Error::Url(format!("{}{path}", self.base)))
    }

    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path)?;
        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(accept) = request.accept {
            builder = builder.header(ACCEPT, accept.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, request.content_type.as_str())
                .body(body.clone());
        }
        debug!(%request, content_type = %request.content_type, "sending request");
        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;
        debug!(%request, %status, "received response");
        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }

    /// POST a new author and return the server's representation of it.
    pub async fn create_author(&self, author: &Author) -> Result<Author> {
        let request = ApiRequest::post(paths::authors(), author)?;
        self.send(&request)
            .await?
            .expect_status(StatusCode::CREATED)?
            .json()
    }

    /// POST a new book under `author` and return the server's representation.
    pub async fn create_book(&self, author: Id, book: &Book) -> Result<Book> {
        let request = ApiRequest::post(paths::books(author), book)?;
        self.send(&request)
            .await?
            .expect_status(StatusCode::CREATED)?
            .json()
    }

    pub async fn get_author(&self, id: Id) -> Result<Author> {
        let request = ApiRequest::get(paths::author(id)).accept(MediaType::Json);
        self.send(&request).await?.expect_status(StatusCode::OK)?.json()
    }

    pub async fn delete_author(&self, id: Id) -> Result<()> {
        let request = ApiRequest::delete(paths::author(id));
        self.send(&request)
            .await?
            .expect_status(StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
