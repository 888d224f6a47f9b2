use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use todo_types::{CreateTodoRequest, ErrorBody, Todo, UpdateTodoRequest};

use crate::error::ClientError;

const TODOS_PATH: &str = "v1/todos";

/// Stateless wrapper over the todo REST endpoints.
///
/// Each call is a single request: no retries, no caching. Dropping the
/// returned future aborts the request; a mutation aborted that way may or
/// may not have reached the server.
#[derive(Debug, Clone)]
pub struct TodoClient {
    http: reqwest::Client,
    base: Url,
}

impl TodoClient {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        // join() replaces the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { http, base })
    }

    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let resp = self.http.get(self.base.join(TODOS_PATH)?).send().await?;
        json(check(resp, None).await?).await
    }

    pub async fn get(&self, id: i64) -> Result<Todo, ClientError> {
        let resp = self.http.get(self.todo_url(id)?).send().await?;
        json(check(resp, Some(id)).await?).await
    }

    pub async fn create(&self, req: &CreateTodoRequest) -> Result<Todo, ClientError> {
        let resp = self
            .http
            .post(self.base.join(TODOS_PATH)?)
            .json(req)
            .send()
            .await?;
        json(check(resp, None).await?).await
    }

    pub async fn update(&self, id: i64, req: &UpdateTodoRequest) -> Result<Todo, ClientError> {
        let resp = self
            .http
            .patch(self.todo_url(id)?)
            .json(req)
            .send()
            .await?;
        json(check(resp, Some(id)).await?).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let resp = self.http.delete(self.todo_url(id)?).send().await?;
        check(resp, Some(id)).await?;
        Ok(())
    }

    fn todo_url(&self, id: i64) -> Result<Url, ClientError> {
        Ok(self.base.join(&format!("{}/{}", TODOS_PATH, id))?)
    }
}

async fn check(resp: Response, id: Option<i64>) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    debug!("{} -> {}", resp.url().path(), status);

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ClientError::NotFound(id));
        }
    }

    let body = resp.json::<ErrorBody>().await.ok();
    Err(ClientError::Rejected { status, body })
}

async fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_under_base_path() {
        let client = TodoClient::new("http://localhost:3001").unwrap();
        assert_eq!(client.todo_url(5).unwrap().as_str(), "http://localhost:3001/v1/todos/5");

        let client = TodoClient::new("http://example.com/api").unwrap();
        assert_eq!(
            client.base.join(TODOS_PATH).unwrap().as_str(),
            "http://example.com/api/v1/todos"
        );
    }

    #[test]
    fn bad_base_url_is_an_error() {
        assert!(matches!(TodoClient::new("not a url"), Err(ClientError::Url(_))));
    }
}
