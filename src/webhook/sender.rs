//! Webhook sender trait and HTTP implementation.

use super::embed::{Embed, WebhookPayload};
use super::{HttpClient, HttpRequest, WebhookError};

/// Longest response body, in characters, kept on a failed delivery.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Trait for delivering notification documents to an external service.
///
/// Delivery failures are never returned to the caller: implementations log
/// them and report the outcome as a boolean.
pub trait WebhookSender: Send + Sync {
    /// Sends one embed, returning `true` only if the endpoint accepted it.
    fn send(&self, embed: &Embed) -> impl std::future::Future<Output = bool> + Send;
}

/// HTTP webhook sender for Discord-style endpoints.
///
/// Posts `{"embeds": [embed]}` as JSON and treats only `204 No Content` as
/// success. There is no retry: a failed delivery is logged and the next
/// change is delivered independently.
///
/// # Example
///
/// ```
/// use ifwatch::webhook::{HttpWebhook, ReqwestClient};
/// use url::Url;
///
/// let webhook = HttpWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://discord.com/api/webhooks/1/token").unwrap(),
/// );
/// assert!(!webhook.is_dry_run());
/// ```
#[derive(Debug)]
pub struct HttpWebhook<H> {
    client: H,
    url: url::Url,
    dry_run: bool,
}

impl<H> HttpWebhook<H> {
    /// Creates a new HTTP webhook.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            url,
            dry_run: false,
        }
    }

    /// Logs payloads instead of sending them.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the configured URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }

    /// Returns true if requests are only logged.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl<H: HttpClient> HttpWebhook<H> {
    /// Builds the POST request carrying the embed.
    fn build_request(&self, embed: &Embed) -> Result<HttpRequest, WebhookError> {
        let body = serde_json::to_vec(&WebhookPayload::new(embed))?;
        Ok(HttpRequest::post(self.url.clone()).with_json_body(body))
    }

    /// Delivers one embed.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::UnexpectedStatus`] for any status other than
    /// 204, [`WebhookError::Http`] when the request fails in transport, and
    /// [`WebhookError::Serialize`] if the payload cannot be encoded.
    pub async fn deliver(&self, embed: &Embed) -> Result<(), WebhookError> {
        let request = self.build_request(embed)?;

        if self.dry_run {
            let body = request
                .body
                .as_deref()
                .map(String::from_utf8_lossy)
                .unwrap_or_default();
            tracing::info!("Dry-run: would POST to {}: {body}", self.url);
            return Ok(());
        }

        let response = self.client.request(request).await?;

        if response.status == http::StatusCode::NO_CONTENT {
            return Ok(());
        }

        Err(WebhookError::UnexpectedStatus {
            status: response.status,
            body: response.body_text().map(truncate_body),
        })
    }
}

impl<H: HttpClient> WebhookSender for HttpWebhook<H> {
    async fn send(&self, embed: &Embed) -> bool {
        match self.deliver(embed).await {
            Ok(()) => {
                tracing::info!("Successfully sent network interface info to webhook");
                true
            }
            Err(WebhookError::UnexpectedStatus {
                status,
                body: Some(body),
            }) => {
                tracing::error!(
                    "Failed to send webhook. Status code: {}, body: {body}",
                    status.as_u16()
                );
                false
            }
            Err(e) => {
                tracing::error!("{e}");
                false
            }
        }
    }
}

/// Caps a response body at [`MAX_ERROR_BODY_CHARS`] so it can be logged.
fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}... ({} bytes total)", &body[..end], body.len()),
        None => body.to_string(),
    }
}
