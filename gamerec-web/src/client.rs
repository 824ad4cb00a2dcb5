//! HTTP client for the game backend.

use crate::dom;
use async_trait::async_trait;
use gamerec_core::{
    DetailPayload, DetailSource, Endpoints, FetchError, RecommendationRequest, RelatedItem,
};
use wasm_bindgen::JsValue;
use web_sys::Response;

/// Browser `fetch` implementation of [`DetailSource`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoints: Endpoints,
}

impl HttpClient {
    #[must_use]
    pub const fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// POST the filter selection and return the rendered results fragment.
    ///
    /// # Errors
    /// Same contract as [`DetailSource::fetch_detail`].
    #[allow(clippy::future_not_send)]
    pub async fn post_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<String, FetchError> {
        let body = serde_json::to_string(request)?;
        let response = dom::post_json(&self.endpoints.recommendations, &body)
            .await
            .map_err(transport)?;
        read_body(&response).await
    }

    #[allow(clippy::future_not_send)]
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = dom::fetch_response(url).await.map_err(transport)?;
        read_body(&response).await
    }
}

#[async_trait(?Send)]
impl DetailSource for HttpClient {
    async fn fetch_detail(&self, id: &str) -> Result<Option<DetailPayload>, FetchError> {
        let body = self.get(&self.endpoints.detail_url(id)).await?;
        Ok(DetailPayload::from_json(&body)?)
    }

    async fn fetch_related(&self, entity: &DetailPayload) -> Result<Vec<RelatedItem>, FetchError> {
        let body = self.get(&self.endpoints.related_url(&entity.id)).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[allow(clippy::future_not_send)]
async fn read_body(response: &Response) -> Result<String, FetchError> {
    if !response.ok() {
        return Err(FetchError::Remote {
            status: response.status(),
        });
    }
    dom::response_text(response).await.map_err(transport)
}

fn transport(err: JsValue) -> FetchError {
    FetchError::Transport(dom::js_error_message(&err))
}
