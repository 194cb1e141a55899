pub mod accounts;
pub mod blogs;
pub mod clippings;
pub mod media;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid json from api: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid header value")]
    Header,
}

/// Request-scoped client configuration: upstream base URL, bearer token and
/// tenant-forwarding headers. Built once per incoming request by the
/// `FromRequest` impl in `middleware` and passed to every call, so nothing
/// about one tenant's request can leak into another's.
#[derive(Clone)]
pub struct ApiContext {
    pub client: reqwest::Client,
    pub base_url: String,
    /// `sessionid` cookie value. Absence is not an error here; the upstream
    /// answers 401 and the route layer turns that into a login redirect.
    pub token: Option<String>,
    /// `sessionkey` cookie value, forwarded as `X-Api-Key`.
    pub api_key: Option<String>,
    /// Tenant host forwarded as `X-Forwarded-Host`, with
    /// `X-Forwarded-App: admin` alongside it.
    pub forwarded_host: Option<String>,
}

impl ApiContext {
    pub(crate) fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| ApiError::Header)?,
            );
        }
        if let Some(ref key) = self.api_key {
            headers.insert(
                "X-Api-Key",
                HeaderValue::from_str(key).map_err(|_| ApiError::Header)?,
            );
        }
        if let Some(ref host) = self.forwarded_host {
            headers.insert(
                "X-Forwarded-Host",
                HeaderValue::from_str(host).map_err(|_| ApiError::Header)?,
            );
            headers.insert("X-Forwarded-App", HeaderValue::from_static("admin"));
        }
        Ok(headers)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Non-2xx responses become `ApiError::Status` with the body attached, so
/// the route layer always sees the upstream status instead of a generic
/// decode failure.
pub(crate) async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(serde_json::from_str(&text)?)
}

pub(crate) async fn expect_success(resp: reqwest::Response) -> Result<(), ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await?;
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(token: Option<&str>, host: Option<&str>) -> ApiContext {
        ApiContext {
            client: reqwest::Client::new(),
            base_url: "http://api.test".into(),
            token: token.map(Into::into),
            api_key: None,
            forwarded_host: host.map(Into::into),
        }
    }

    #[test]
    fn headers_carry_bearer_and_tenant_pair() {
        let headers = ctx(Some("tok-123"), Some("acme.consub.io"))
            .headers()
            .unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok-123");
        assert_eq!(headers.get("X-Forwarded-Host").unwrap(), "acme.consub.io");
        assert_eq!(headers.get("X-Forwarded-App").unwrap(), "admin");
        assert!(headers.get("X-Api-Key").is_none());
    }

    #[test]
    fn anonymous_context_sends_no_auth_headers() {
        let headers = ctx(None, None).headers().unwrap();
        assert!(headers.is_empty());
    }

    #[test]
    fn url_joins_path_onto_base() {
        assert_eq!(
            ctx(None, None).url("/admin/blogs/posts"),
            "http://api.test/admin/blogs/posts"
        );
    }
}
