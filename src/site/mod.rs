//! Site model and endpoint resolution.
//!
//! # Data Flow
//! ```text
//! Site (language, project domain)
//!     → resolver.rs (pure mapping, no I/O)
//!     → EndpointPair { mobile, desktop }
//!     → client entry points (mobile = primary, desktop = secondary)
//! ```
//!
//! # Design Decisions
//! - Validation happens once, at construction; a Site always resolves
//! - Resolution is a pure string producer; reachability is the transport's
//!   problem

pub mod resolver;

pub use resolver::{EndpointPair, Site, SiteError};
