//! Webhook layer for formatting and delivering notifications.
//!
//! This module provides types and traits for:
//! - Rendering snapshots as Discord-style embeds ([`format`], [`Embed`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Webhook delivery ([`WebhookSender`], [`HttpWebhook`])

mod client;
mod embed;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use embed::{COLOR, Embed, EmbedField, TITLE, WebhookPayload, format};
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{HttpWebhook, MAX_ERROR_BODY_CHARS, WebhookSender};
