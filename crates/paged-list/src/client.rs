//! API Client
//!
//! Builds list and mutation requests, attaches the session token and
//! turns error responses into `ApiError`.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::filter::FilterState;
use crate::page::PaginatedResult;
use crate::session::Session;
use crate::transport::{ApiRequest, Method, Transport};

/// A single-item write, kept as plain data until it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Mutation {
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    /// Deletes are the only writes that need an explicit confirmation
    pub fn is_destructive(&self) -> bool {
        self.method == Method::Delete
    }

    fn to_request(&self) -> ApiRequest {
        ApiRequest::new(self.method, self.path.clone()).with_body(self.body.clone())
    }
}

pub struct ApiClient<T> {
    transport: Rc<T>,
    session: Session,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self {
            transport: Rc::new(transport),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return the body of a 2xx response
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let request = request.with_authorization(self.session.authorization());
        let method = request.method;
        let target = request.target();
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response.body);
        }

        let err = ApiError::from_response(response.status, &response.body);
        tracing::warn!(method = method.as_str(), %target, status = response.status, error = %err, "request failed");
        if err == ApiError::Unauthorized {
            self.session.expire();
        }
        Err(err)
    }

    /// `GET <resource>?<filter query>`
    pub async fn fetch_page<R: DeserializeOwned>(
        &self,
        resource: &str,
        filter: &FilterState,
    ) -> Result<PaginatedResult<R>, ApiError> {
        let request = ApiRequest::new(Method::Get, resource).with_query(filter.to_query_string());
        let body = self.execute(request).await?;
        let page: PaginatedResult<R> = serde_json::from_str(&body)?;
        page.validate().map_err(ApiError::Transport)?;
        Ok(page)
    }

    /// Run a mutation; an empty response body yields `None`
    pub async fn send(&self, mutation: &Mutation) -> Result<Option<Value>, ApiError> {
        let body = self.execute(mutation.to_request()).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::Post, path).with_body(Some(serde_json::to_value(body)?));
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterDefaults;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn page_json(ids: &[u32]) -> String {
        json!({
            "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
            "totalElements": ids.len(),
            "numberOfElements": ids.len(),
            "totalPages": if ids.is_empty() { 0 } else { 1 },
            "currentPage": 0,
            "pageSize": 10
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_fetch_page_sends_bearer_and_query() {
        let mock = MockTransport::new();
        mock.respond_with(200, &page_json(&[1, 2]));
        let client = ApiClient::new(mock.clone(), Session::with_token("t0k"));

        let mut filter = FilterState::new(FilterDefaults::new(10));
        filter.set_field("search", "".into());
        let page: PaginatedResult<Value> = client.fetch_page("users", &filter).await.unwrap();

        assert_eq!(page.data.len(), 2);
        let sent = mock.requests();
        assert_eq!(sent[0].target(), "users?page=0&pageSize=10");
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer t0k"));
    }

    #[tokio::test]
    async fn test_inconsistent_page_is_rejected() {
        let mock = MockTransport::new();
        mock.respond_with(
            200,
            r#"{"data":[],"totalElements":0,"numberOfElements":3,"totalPages":0,"currentPage":0,"pageSize":10}"#,
        );
        let client = ApiClient::new(mock, Session::new());
        let filter = FilterState::new(FilterDefaults::new(10));
        let result = client.fetch_page::<Value>("tasks", &filter).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_expires_session() {
        let mock = MockTransport::new();
        mock.respond_with(401, "");
        let session = Session::with_token("old");
        let client = ApiClient::new(mock, session.clone());

        let result = client.send(&Mutation::delete("tasks/1")).await;
        assert_eq!(result, Err(ApiError::Unauthorized));
        assert!(session.is_expired());
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_empty_mutation_body() {
        let mock = MockTransport::new();
        mock.respond_with(204, "");
        mock.respond_with(200, r#"{"id":4,"status":"COMPLETED"}"#);
        let client = ApiClient::new(mock.clone(), Session::new());

        assert_eq!(client.send(&Mutation::delete("tasks/4")).await, Ok(None));
        let updated = client
            .send(&Mutation::patch("tasks/4/status", json!({"status": "COMPLETED"})))
            .await
            .unwrap();
        assert_eq!(updated.unwrap()["status"], "COMPLETED");
        assert_eq!(mock.requests()[1].body, Some(json!({"status": "COMPLETED"})));
    }
}
