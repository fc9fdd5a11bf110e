//! Dual-endpoint HTTP client with transparent mobile-to-desktop fallback.
//!
//! A request is issued against the mobile endpoint first. If, and only if,
//! the mobile endpoint rejects it for a recognized structural reason
//! (malformed mobile URL, missing mobile host, 404/501), the logically
//! identical request is re-issued once against the desktop endpoint. The
//! caller neither detects the failure nor reconstructs the request.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                 FALLBACK CLIENT                  │
//!                  │                                                  │
//!   Caller ────────┼─▶ client ──▶ site ──────▶ fallback ──▶ transport ┼──▶ mobile endpoint
//!                  │   surface    resolver     orchestrator   (HTTP)  │
//!                  │                               │                  │
//!                  │                          classifier              │
//!                  │                               │                  │
//!   Caller ◀───────┼── callbacks / future ◀── attempt 2 ──▶ transport ┼──▶ desktop endpoint
//!                  │                                                  │
//!                  │  ┌────────────────────────────────────────────┐  │
//!                  │  │           Cross-Cutting Concerns           │  │
//!                  │  │   config        observability (logging,    │  │
//!                  │  │   (TOML)        metrics, operation ids)    │  │
//!                  │  └────────────────────────────────────────────┘  │
//!                  └──────────────────────────────────────────────────┘
//! ```
//!
//! # Entry points
//!
//! [`FallbackClient`] exposes each of GET and POST in three shapes:
//! explicit URLs with the retry/success/failure callback triad, a site
//! form resolving a [`Site`] to its (mobile, desktop) URL pair, and a
//! future form that settles with the terminal outcome only.

// Core subsystems
pub mod client;
pub mod fallback;
pub mod site;
pub mod transport;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use client::FallbackClient;
pub use config::ClientConfig;
pub use fallback::{AttemptHandle, OperationHandle, ResponseFuture, Target};
pub use site::Site;
pub use transport::{Method, Params, TransportError};
