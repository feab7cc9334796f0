//! ifwatch: network interface watcher
//!
//! A library for capturing the IPv4 addresses assigned to a host's network
//! interfaces and notifying a Discord-style webhook when they change.

pub mod config;
pub mod monitor;
pub mod network;
pub mod time;
pub mod webhook;
