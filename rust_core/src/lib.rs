//! Hwwatch Core - shared building blocks for the homework status watcher.
//!
//! This crate provides:
//! - Homework review models (status codes, verdict lookup, record parsing)
//! - The closed `WatchError` taxonomy used across every service
//! - The review-API client (time-windowed status fetches)
//! - The Telegram Bot API client (notification delivery)

pub mod clients;
pub mod errors;
pub mod models;

pub use errors::WatchError;
