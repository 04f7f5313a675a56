// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No caching and no UI logic here; see order_store.rs for the cache
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

use crate::config::CONFIG;
use crate::error::{AuthError, OrderError, OrderResult};
use crate::models::auth::{SignInRequest, SignInResponse};
use crate::models::order::{NewOrder, Order, OrderId, OrderPatch};
use crate::services::order_service::OrderService;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout_seconds: u32,
}

/// Aborts an in-flight request once the timer fires; dropping it disarms the timer
struct Deadline {
    controller: AbortController,
    _timer: Timeout,
}

impl Deadline {
    fn start(seconds: u32) -> Option<Self> {
        let controller = AbortController::new().ok()?;
        let abort = controller.clone();
        let timer = Timeout::new(seconds.saturating_mul(1000), move || {
            log::warn!("⏱️ Request exceeded {}s, aborting", seconds);
            abort.abort();
        });
        Some(Self {
            controller,
            _timer: timer,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds: CONFIG.network_timeout_seconds,
        }
    }

    /// Attach a fresh deadline to `request`; keep the guard alive until the response is read
    fn with_deadline(&self, request: RequestBuilder) -> (RequestBuilder, Option<Deadline>) {
        if self.timeout_seconds == 0 {
            return (request, None);
        }
        let deadline = Deadline::start(self.timeout_seconds);
        let signal = deadline.as_ref().map(Deadline::signal);
        (request.abort_signal(signal.as_ref()), deadline)
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    fn order_url(&self, id: &OrderId) -> String {
        format!("{}/orders/{}", self.base_url, id)
    }

    fn sign_in_url(&self) -> String {
        format!("{}/auth/sign-in", self.base_url)
    }

    /// Exchange credentials for session tokens
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<SignInResponse, AuthError> {
        let request = SignInRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Signing in as {}", username);

        let (builder, _deadline) = self.with_deadline(Request::post(&self.sign_in_url()));
        let response = builder.json(&request)?.send().await?;

        match response.status() {
            401 | 403 => Err(AuthError::InvalidCredentials),
            _ if response.ok() => Ok(response.json::<SignInResponse>().await?),
            status => Err(AuthError::Transport(format!(
                "HTTP {}: {}",
                status,
                response.status_text()
            ))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a non-2xx response onto the order error taxonomy
async fn error_from_response(response: Response, id: Option<&OrderId>) -> OrderError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    classify_status(status, body, id)
}

/// Servers usually answer `{"message": "..."}` (or `error`); fall back to the raw body
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or(body)
}

fn classify_status(status: u16, body: String, id: Option<&OrderId>) -> OrderError {
    let body = error_message(body);
    match (status, id) {
        (404, Some(id)) => OrderError::NotFound(id.clone()),
        (400 | 422, _) => OrderError::Validation(body),
        _ => OrderError::Transport(format!("HTTP {}: {}", status, body)),
    }
}

#[async_trait(?Send)]
impl OrderService for ApiClient {
    async fn list(&self, filter: &str) -> OrderResult<Vec<Order>> {
        log::debug!("📋 GET orders (filter: {:?})", filter);

        let (mut request, _deadline) = self.with_deadline(Request::get(&self.orders_url()));
        if !filter.is_empty() {
            request = request.query([("filter", filter)]);
        }
        let response = request.send().await?;

        if !response.ok() {
            return Err(error_from_response(response, None).await);
        }
        Ok(response.json::<Vec<Order>>().await?)
    }

    async fn create(&self, order: NewOrder) -> OrderResult<Order> {
        log::info!("➕ Creating order for {}", order.username);

        let (builder, _deadline) = self.with_deadline(Request::post(&self.orders_url()));
        let response = builder.json(&order)?.send().await?;

        if !response.ok() {
            return Err(error_from_response(response, None).await);
        }
        Ok(response.json::<Order>().await?)
    }

    async fn update(&self, id: &OrderId, patch: OrderPatch) -> OrderResult<Order> {
        log::info!("✏️ Updating order {}", id);

        let (builder, _deadline) = self.with_deadline(Request::patch(&self.order_url(id)));
        let response = builder.json(&patch)?.send().await?;

        if !response.ok() {
            return Err(error_from_response(response, Some(id)).await);
        }
        Ok(response.json::<Order>().await?)
    }

    async fn delete(&self, id: &OrderId) -> OrderResult<()> {
        log::info!("🗑️ Deleting order {}", id);

        let (builder, _deadline) = self.with_deadline(Request::delete(&self.order_url(id)));
        let response = builder.send().await?;

        if !response.ok() {
            return Err(error_from_response(response, Some(id)).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_strip_trailing_slash() {
        let client = ApiClient::with_base_url("http://localhost:3000/");
        assert_eq!(client.orders_url(), "http://localhost:3000/orders");
        assert_eq!(
            client.order_url(&OrderId::Number(42)),
            "http://localhost:3000/orders/42"
        );
        assert_eq!(client.sign_in_url(), "http://localhost:3000/auth/sign-in");
    }

    #[test]
    fn status_codes_map_to_error_kinds() {
        let id = OrderId::Number(1);
        assert_eq!(
            classify_status(404, String::new(), Some(&id)),
            OrderError::NotFound(id.clone())
        );
        assert_eq!(
            classify_status(422, "username required".into(), None),
            OrderError::Validation("username required".into())
        );
        assert_eq!(
            classify_status(400, r#"{"message":"username is required"}"#.into(), None),
            OrderError::Validation("username is required".into())
        );
        assert!(matches!(
            classify_status(404, "no route".into(), None),
            OrderError::Transport(_)
        ));
        assert!(matches!(
            classify_status(500, "boom".into(), Some(&id)),
            OrderError::Transport(_)
        ));
    }
}
