// Server Manager (aka Server Director)
// Drives the construction of a gateway server through an injected builder

use tracing::debug;

use super::{BuildState, ServerBuilder};
use crate::{GatewayConfig, Result};

/// Manages the creation of a GraphQL server
///
/// The manager never branches on the server type: choosing the builder
/// already committed to a backend, so `create_server` only delegates.
///
/// ```rust
/// use graphql_gateway::{GatewayConfig, KafkaServerBuilder, ServerManager};
///
/// let config = GatewayConfig::new("KAFKA", "4000");
/// let mut manager = ServerManager::new(Box::new(KafkaServerBuilder::new()));
/// manager.create_server(&config).unwrap();
///
/// assert!(manager.into_result().is_built());
/// ```
pub struct ServerManager {
    builder: Box<dyn ServerBuilder>,
}

impl ServerManager {
    pub fn new(builder: Box<dyn ServerBuilder>) -> Self {
        Self { builder }
    }

    /// Run one build cycle on the builder
    pub fn create_server(&mut self, config: &GatewayConfig) -> Result<()> {
        debug!("Creating server for type {:?}", config.server_type);
        self.builder.build(config)
    }

    pub fn result(&self) -> &BuildState {
        self.builder.result()
    }

    /// Consume the manager and take the builder's product
    pub fn into_result(self) -> BuildState {
        self.builder.into_result()
    }
}
