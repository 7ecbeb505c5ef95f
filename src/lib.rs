// GraphQL Gateway - Rust Edition
// A configurable GraphQL server backed by microservices or Kafka topics

//! # GraphQL Gateway Library
//!
//! This is the library crate behind the `server` binary. It owns everything
//! needed to turn a [`GatewayConfig`] into a running GraphQL server.
//!
//! ## Core Components
//!
//! ### Configuration
//! - [`GatewayConfig`]: the immutable settings read once at startup
//!
//! ### GraphQL Engine
//! - [`GatewaySchema`]: the root query schema served by the gateway
//! - [`create_schema`]: builds the schema
//!
//! ### Server Construction
//!
//! Servers are never constructed directly. An entry point picks a
//! [`ServerBuilder`] for the requested [`ServerType`], a [`ServerManager`]
//! drives the build, and the resulting [`Server`] is run:
//!
//! ```text
//! launch(config)
//!   ↓ selects
//! ServiceServerBuilder | KafkaServerBuilder
//!   ↓ driven by
//! ServerManager::create_server
//!   ↓ produces
//! Server::Service | Server::Kafka
//!   ↓
//! Server::run
//! ```
//!
//! **Usage Example:**
//! ```rust,no_run
//! use graphql_gateway::{GatewayConfig, ServerManager, ServiceServerBuilder};
//!
//! # async fn demo() -> graphql_gateway::Result<()> {
//! let config = GatewayConfig::new("SERVICE", "4000");
//!
//! let mut manager = ServerManager::new(Box::new(ServiceServerBuilder::new()));
//! manager.create_server(&config)?;
//!
//! if let Some(server) = manager.into_result().into_server() {
//!     server.run().await?;
//! }
//! # Ok(())
//! # }
//! ```

/// Startup configuration (CLI flags, `GS_` environment variables)
pub mod config;

// GraphQL schema and resolvers
pub mod engine;

// Server variants, builders and the construction manager
pub mod server;

/// Build information printed by `server version`
pub mod version;

pub use config::GatewayConfig;
pub use engine::graphql::{create_schema, GatewaySchema, Query};
pub use server::{
    launch, BuildState, KafkaServer, KafkaServerBuilder, Server, ServerBuilder, ServerManager,
    ServerType, ServiceServer, ServiceServerBuilder,
};

use thiserror::Error;

/// Errors raised while configuring or running the gateway
///
/// ## Rust Learning Notes:
///
/// ### The `thiserror` Crate
/// - `#[derive(Error)]` implements the `std::error::Error` trait
/// - `#[error("...")]` provides the `Display` message
/// - `{field}` in messages interpolates the variant's fields
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The requested server type is not one of `SERVICE` or `KAFKA`
    #[error("invalid server type: {0:?} (expected SERVICE or KAFKA)")]
    InvalidServerType(String),

    /// A server variant could not be configured from the supplied settings
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP listener could not be bound
    #[error("failed to bind listener on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// The HTTP server stopped with an error after binding
    #[error("server error: {0}")]
    Serve(String),
}

/// Type alias for Results that use the gateway error type
pub type Result<T> = std::result::Result<T, GatewayError>;
