// Server builders
// Each builder produces exactly one configured server variant

use tracing::debug;

use super::{KafkaServer, Server, ServiceServer};
use crate::{GatewayConfig, Result};

/// Product slot held by a builder
#[derive(Debug, Default)]
pub enum BuildState {
    /// `build` has not completed yet
    #[default]
    NotBuilt,
    /// The configured server, ready to run
    Built(Server),
}

impl BuildState {
    pub fn is_built(&self) -> bool {
        matches!(self, BuildState::Built(_))
    }

    pub fn server(&self) -> Option<&Server> {
        match self {
            BuildState::Built(server) => Some(server),
            BuildState::NotBuilt => None,
        }
    }

    pub fn into_server(self) -> Option<Server> {
        match self {
            BuildState::Built(server) => Some(server),
            BuildState::NotBuilt => None,
        }
    }
}

/// Builds one server variant from the gateway configuration
///
/// `build` is idempotent: once a builder holds a server, later calls leave
/// it untouched, whatever configuration they pass.
pub trait ServerBuilder: Send {
    /// Create and configure the server
    fn build(&mut self, config: &GatewayConfig) -> Result<()>;

    /// The server produced by `build`, or `NotBuilt`
    fn result(&self) -> &BuildState;

    /// Hand the product over to the caller
    fn into_result(self: Box<Self>) -> BuildState;
}

/// Builds a [`ServiceServer`] whose resolvers call microservice endpoints
#[derive(Debug, Default)]
pub struct ServiceServerBuilder {
    state: BuildState,
}

impl ServiceServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServerBuilder for ServiceServerBuilder {
    fn build(&mut self, config: &GatewayConfig) -> Result<()> {
        if self.state.is_built() {
            debug!("Service server already built, skipping");
            return Ok(());
        }

        let server = ServiceServer::configure(config)?;
        self.state = BuildState::Built(Server::Service(server));
        debug!("Service server built");
        Ok(())
    }

    fn result(&self) -> &BuildState {
        &self.state
    }

    fn into_result(self: Box<Self>) -> BuildState {
        self.state
    }
}

/// Builds a [`KafkaServer`] whose resolvers are backed by Kafka topics
#[derive(Debug, Default)]
pub struct KafkaServerBuilder {
    state: BuildState,
}

impl KafkaServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServerBuilder for KafkaServerBuilder {
    fn build(&mut self, config: &GatewayConfig) -> Result<()> {
        if self.state.is_built() {
            debug!("Kafka server already built, skipping");
            return Ok(());
        }

        let server = KafkaServer::configure(config);
        self.state = BuildState::Built(Server::Kafka(server));
        debug!("Kafka server built");
        Ok(())
    }

    fn result(&self) -> &BuildState {
        &self.state
    }

    fn into_result(self: Box<Self>) -> BuildState {
        self.state
    }
}
