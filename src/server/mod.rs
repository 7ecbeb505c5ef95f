// Gateway Server Implementations
// Server variants and the builder/manager machinery that constructs them

//! # Gateway Server Module
//!
//! The gateway can resolve GraphQL operations through two backends:
//!
//! - **SERVICE**: an HTTP server whose resolvers call microservice endpoints
//!   ([`ServiceServer`])
//! - **KAFKA**: resolvers backed by Kafka topics ([`KafkaServer`], currently a
//!   stub that starts and returns immediately)
//!
//! ## Construction Flow
//!
//! ```text
//! launch(config)
//!   ↓ parses config.server_type
//! ServerType
//!   ↓ selects
//! Box<dyn ServerBuilder>
//!   ↓ injected into
//! ServerManager::create_server(config)
//!   ↓ calls
//! ServerBuilder::build(config)  ← idempotent
//!   ↓ holds
//! BuildState::Built(Server)
//!   ↓
//! Server::run()
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::{GatewayConfig, GatewayError, Result};

/// Builders that produce configured server variants
pub mod builder;

/// Axum-based GraphQL server for the SERVICE backend
pub mod graphql;

/// Stub server for the KAFKA backend
pub mod kafka;

/// Construction manager driving a single build cycle
pub mod manager;

#[cfg(test)]
mod graphql_tests;

pub use builder::{BuildState, KafkaServerBuilder, ServerBuilder, ServiceServerBuilder};
pub use graphql::ServiceServer;
pub use kafka::KafkaServer;
pub use manager::ServerManager;

/// Backend selected with `--server-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerType {
    Service,
    Kafka,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Service => "SERVICE",
            ServerType::Kafka => "KAFKA",
        }
    }

    /// Fresh builder for this backend
    pub fn builder(&self) -> Box<dyn ServerBuilder> {
        match self {
            ServerType::Service => Box::new(ServiceServerBuilder::new()),
            ServerType::Kafka => Box::new(KafkaServerBuilder::new()),
        }
    }
}

impl FromStr for ServerType {
    type Err = GatewayError;

    // Exact, case-sensitive match; there is no fallback variant.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SERVICE" => Ok(ServerType::Service),
            "KAFKA" => Ok(ServerType::Kafka),
            other => Err(GatewayError::InvalidServerType(other.to_string())),
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully configured gateway server
pub enum Server {
    Service(ServiceServer),
    Kafka(KafkaServer),
}

impl Server {
    pub fn server_type(&self) -> ServerType {
        match self {
            Server::Service(_) => ServerType::Service,
            Server::Kafka(_) => ServerType::Kafka,
        }
    }

    /// Run the server
    ///
    /// The service variant serves until the process is terminated; the
    /// Kafka variant returns immediately.
    pub async fn run(self) -> Result<()> {
        match self {
            Server::Service(server) => server.run().await,
            Server::Kafka(server) => server.run().await,
        }
    }
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Server::Service(server) => f.debug_tuple("Service").field(server).finish(),
            Server::Kafka(server) => f.debug_tuple("Kafka").field(server).finish(),
        }
    }
}

/// Build and run the server selected by `config.server_type`
///
/// An unsupported server type fails before any builder is created, so no
/// listener is ever bound for it.
pub async fn launch(config: &GatewayConfig) -> Result<()> {
    let server_type: ServerType = config.server_type.parse()?;
    info!("Starting server with {}...", server_type);

    let mut manager = ServerManager::new(server_type.builder());
    manager.create_server(config)?;

    match manager.into_result() {
        BuildState::Built(server) => server.run().await,
        BuildState::NotBuilt => Err(GatewayError::Configuration(format!(
            "{} builder finished without producing a server",
            server_type
        ))),
    }
}
