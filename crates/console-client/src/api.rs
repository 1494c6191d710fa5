// crates/console-client/src/api.rs

use async_trait::async_trait;
use console_core::{Account, ExecutionLog, Feed, Order, OrderRequest, Rejection};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A GET came back with a non-2xx status.
    #[error("http {status}")]
    Status { status: StatusCode },

    /// The backend refused a create/cancel and (maybe) said why.
    #[error("rejected with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("transport: {0}")]
    Transport(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-supplied rejection message, if this is an application rejection.
    pub fn rejection(&self) -> Option<Option<&str>> {
        match self {
            ApiError::Rejected { message, .. } => Some(message.as_deref()),
            _ => None,
        }
    }
}

/// The trading backend, as far as the console is concerned.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError>;

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError>;

    async fn fetch_execution_logs(&self) -> Result<Vec<ExecutionLog>, ApiError>;

    async fn submit_order(&self, request: &OrderRequest) -> Result<Order, ApiError>;

    async fn cancel_order(&self, order_id: i64) -> Result<Order, ApiError>;
}

/// `Backend` over the REST API.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// `api_root` is the prefix every endpoint hangs off, e.g.
    /// `http://localhost:8080/api`. Without a `timeout` requests wait as long
    /// as the transport does.
    pub fn new(api_root: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        // join() drops the last segment unless the base ends with '/'
        let mut root = api_root.trim_end_matches('/').to_string();
        root.push('/');
        let base = Url::parse(&root).map_err(|e| ApiError::Transport(format!("api root: {}", e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Transport(format!("bad path {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode an order on 2xx, otherwise an error body into `Rejected`.
    async fn read_order(resp: reqwest::Response) -> Result<Order, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let message = serde_json::from_slice::<Rejection>(&bytes)
            .ok()
            .and_then(|r| r.message);
        Err(ApiError::Rejected { status, message })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_json(Feed::Accounts.path()).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json(Feed::Orders.path()).await
    }

    async fn fetch_execution_logs(&self) -> Result<Vec<ExecutionLog>, ApiError> {
        self.get_json(Feed::ExecutionLogs.path()).await
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        let url = self.url(Feed::Orders.path())?;
        debug!("POST {} {:?}", url, request);

        let resp = self.client.post(url).json(request).send().await?;
        Self::read_order(resp).await
    }

    async fn cancel_order(&self, order_id: i64) -> Result<Order, ApiError> {
        let url = self.url(&format!("orders/{}/cancel", order_id))?;
        debug!("PUT {}", url);

        let resp = self.client.put(url).send().await?;
        Self::read_order(resp).await
    }
}
