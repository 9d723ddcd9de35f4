use reqwest::Client as HttpClient;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use url::Url;

use crate::api::error::{ApiError, ApiResult};
use crate::api::models::{ChatRequest, Contact, ServerInfo};
use crate::config::AppConfig;

const CONTACTS: &str = "contactos";
const CHAT: &str = "chat";

/// HTTP client for the contacts and assistant API.
///
/// Every request runs on the shared tokio runtime, so the returned futures
/// can be awaited from the GTK main context as well as from tests.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::build(base_url, None)
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::build(&config.api_url, config.timeout())
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base = Url::parse(base_url.trim())?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base_url.to_string()));
        }
        let mut builder = HttpClient::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Reach the API root and return its welcome message.
    pub async fn ping(&self) -> ApiResult<String> {
        let req = self.http.get(self.base.clone());
        run(async move {
            let resp = expect_success(req.send().await?, "/")?;
            let info: ServerInfo = decode(resp).await?;
            Ok(info.message)
        })
        .await
    }

    pub async fn list_contacts(&self) -> ApiResult<Vec<Contact>> {
        let req = self.http.get(self.endpoint(&[CONTACTS])?);
        run(async move {
            let resp = expect_success(req.send().await?, CONTACTS)?;
            decode(resp).await
        })
        .await
    }

    /// Fetch one contact. A 404 comes back as [`ApiError::NotFound`].
    pub async fn get_contact(&self, id: &str) -> ApiResult<Contact> {
        let req = self.http.get(self.endpoint(&[CONTACTS, id])?);
        let what = format!("contacto {id}");
        run(async move {
            let resp = expect_success(req.send().await?, &what)?;
            decode(resp).await
        })
        .await
    }

    /// Create a contact. Returns the stored record when the server echoes one.
    pub async fn create_contact(&self, contact: &Contact) -> ApiResult<Option<Contact>> {
        let req = self.http.post(self.endpoint(&[CONTACTS])?).json(contact);
        run(async move {
            let resp = expect_success(req.send().await?, CONTACTS)?;
            Ok(decode(resp).await.ok())
        })
        .await
    }

    pub async fn update_contact(&self, id: &str, contact: &Contact) -> ApiResult<Option<Contact>> {
        let req = self.http.put(self.endpoint(&[CONTACTS, id])?).json(contact);
        let what = format!("contacto {id}");
        run(async move {
            let resp = expect_success(req.send().await?, &what)?;
            Ok(decode(resp).await.ok())
        })
        .await
    }

    pub async fn delete_contact(&self, id: &str) -> ApiResult<()> {
        let req = self.http.delete(self.endpoint(&[CONTACTS, id])?);
        let what = format!("contacto {id}");
        run(async move {
            expect_success(req.send().await?, &what)?;
            Ok(())
        })
        .await
    }

    /// Relay a prompt to the assistant.
    ///
    /// The status code is not checked: error bodies are JSON too and get
    /// shown to the user as they are. Only a body that is not JSON fails.
    pub async fn chat(&self, prompt: &str) -> ApiResult<Value> {
        let req = self
            .http
            .post(self.endpoint(&[CHAT])?)
            .json(&ChatRequest { prompt });
        run(async move {
            let resp = req.send().await?;
            if !resp.status().is_success() {
                log::warn!("Assistant answered HTTP {}", resp.status());
            }
            decode(resp).await
        })
        .await
    }
}

async fn run<T, F>(fut: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: Future<Output = ApiResult<T>> + Send + 'static,
{
    crate::utils::offload(fut).await?
}

fn expect_success(resp: Response, what: &str) -> ApiResult<Response> {
    let status = resp.status();
    log::debug!("{} {} -> {}", what, resp.url(), status);
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(what.to_string()));
    }
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let api = ApiClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            api.endpoint(&[CONTACTS]).unwrap().as_str(),
            "http://127.0.0.1:8000/contactos"
        );
        assert_eq!(
            api.endpoint(&[CONTACTS, "12"]).unwrap().as_str(),
            "http://127.0.0.1:8000/contactos/12"
        );

        let nested = ApiClient::new("https://example.org/agenda/").unwrap();
        assert_eq!(
            nested.endpoint(&[CHAT]).unwrap().as_str(),
            "https://example.org/agenda/chat"
        );
    }

    #[test]
    fn ids_are_encoded_as_one_segment() {
        let api = ApiClient::new("http://localhost:8000").unwrap();
        let url = api.endpoint(&[CONTACTS, "1/2 3"]).unwrap();
        assert_eq!(url.path(), "/contactos/1%2F2%203");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:agenda@example.org"),
            Err(ApiError::InvalidBase(_))
        ));
    }
}
