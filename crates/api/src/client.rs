// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator service client.
//!
//! The storefront never persists anything itself; every read and write
//! goes through [`RaffleService`]. [`HttpRaffleService`] is the production
//! implementation and speaks JSON over HTTP.

use crate::config::ServiceConfig;
use crate::error::{ApiError, ApiResult};
use crate::request_response::{
    CreateOrderRequest, CreateOrderResponse, OrderResponse, RaffleResponse,
};
use raffle_shop_domain::{Order, OrderDraft, OrderId, Raffle};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Operations the storefront needs from the order/raffle service.
pub trait RaffleService: Send + Sync {
    /// Fetches a raffle with its full number list.
    fn fetch_raffle(&self, raffle_eid: &str) -> impl Future<Output = ApiResult<Raffle>> + Send;

    /// Lists every order.
    fn list_orders(&self) -> impl Future<Output = ApiResult<Vec<Order>>> + Send;

    /// Creates an order and returns its server-assigned identifier.
    fn create_order(&self, draft: &OrderDraft) -> impl Future<Output = ApiResult<OrderId>> + Send;

    /// Approves an order.
    fn approve_order(&self, order_id: &OrderId) -> impl Future<Output = ApiResult<()>> + Send;

    /// Rejects an order.
    fn reject_order(&self, order_id: &OrderId) -> impl Future<Output = ApiResult<()>> + Send;
}

/// [`RaffleService`] over HTTP.
///
/// Every request carries `Accept: application/json`. Approve and reject
/// are `GET` requests because that is what the service exposes.
#[derive(Debug, Clone)]
pub struct HttpRaffleService {
    client: Client,
    base_url: String,
}

impl HttpRaffleService {
    /// Creates a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ServiceConfig) -> ApiResult<Self> {
        config.validate()?;
        let client: Client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn accept_json(request: RequestBuilder) -> RequestBuilder {
        request.header(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url: String = self.url(path);
        debug!(%url, "GET");
        let response: Response = Self::accept_json(self.client.get(&url)).send().await?;
        Self::decode(Self::check_status(response).await?).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url: String = self.url(path);
        debug!(%url, "POST");
        let response: Response = Self::accept_json(self.client.post(&url).json(body))
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    /// Sends a `GET` whose response body is ignored.
    async fn get_empty(&self, path: &str) -> ApiResult<()> {
        let url: String = self.url(path);
        debug!(%url, "GET");
        let response: Response = Self::accept_json(self.client.get(&url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> ApiResult<Response> {
        let status: StatusCode = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: String = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "Collaborator request failed");
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(body));
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let text: String = response.text().await?;
        serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

impl RaffleService for HttpRaffleService {
    async fn fetch_raffle(&self, raffle_eid: &str) -> ApiResult<Raffle> {
        let path: String = format!("raffles/{}", urlencoding::encode(raffle_eid));
        let response: RaffleResponse = self.get(&path).await?;
        Ok(Raffle::from(response))
    }

    async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        let response: Vec<OrderResponse> = self.get("orders").await?;
        Ok(response.into_iter().map(Order::from).collect())
    }

    async fn create_order(&self, draft: &OrderDraft) -> ApiResult<OrderId> {
        let request: CreateOrderRequest = CreateOrderRequest::from(draft);
        let response: CreateOrderResponse = self.post("orders", &request).await?;
        Ok(response.order_id())
    }

    async fn approve_order(&self, order_id: &OrderId) -> ApiResult<()> {
        let path: String = format!("orders/{}/approve", urlencoding::encode(order_id.value()));
        self.get_empty(&path).await
    }

    async fn reject_order(&self, order_id: &OrderId) -> ApiResult<()> {
        let path: String = format!("orders/{}/reject", urlencoding::encode(order_id.value()));
        self.get_empty(&path).await
    }
}
