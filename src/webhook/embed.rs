//! Discord-style embed document built from an interface snapshot.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::network::InterfaceSnapshot;

/// Title shown on every notification.
pub const TITLE: &str = "Network Interfaces";

/// Embed accent color (Discord blue).
pub const COLOR: u32 = 3_447_003;

/// One interface rendered as an embed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    /// Interface name.
    pub name: String,
    /// Addresses, one per line.
    pub value: String,
    /// Render side by side with neighbouring fields.
    pub inline: bool,
}

/// A notification document describing the host's interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    /// Fixed title, see [`TITLE`].
    pub title: String,
    /// Free text naming the host.
    pub description: String,
    /// Accent color, see [`COLOR`].
    pub color: u32,
    /// ISO-8601 UTC time the document was built.
    pub timestamp: String,
    /// One field per interface, in snapshot order.
    pub fields: Vec<EmbedField>,
}

/// The JSON body posted to the webhook.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    /// Always a single embed.
    pub embeds: [&'a Embed; 1],
}

impl<'a> WebhookPayload<'a> {
    /// Wraps one embed for sending.
    #[must_use]
    pub const fn new(embed: &'a Embed) -> Self {
        Self { embeds: [embed] }
    }
}

/// Renders a snapshot into an [`Embed`].
///
/// Fields follow the snapshot's iteration order and each field lists the
/// interface's addresses newline-joined in stored order.
#[must_use]
pub fn format(snapshot: &InterfaceSnapshot, hostname: &str, now: SystemTime) -> Embed {
    let fields = snapshot
        .iter()
        .map(|interface| EmbedField {
            name: interface.name.clone(),
            value: interface.joined(),
            inline: true,
        })
        .collect();

    Embed {
        title: TITLE.to_string(),
        description: format!("Network interfaces on {hostname}"),
        color: COLOR,
        timestamp: iso8601_utc(now),
        fields,
    }
}

/// Formats a time as RFC 3339 in UTC with microseconds and a `+00:00` offset.
fn iso8601_utc(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, false)
}
