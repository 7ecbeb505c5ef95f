// GraphQL server for the KAFKA backend

use tracing::warn;

use crate::{GatewayConfig, Result};

/// Server that resolves GraphQL operations through Kafka topics
///
/// Microservices behind this server talk to each other through Kafka.
/// Topic consumption is not implemented: configuring keeps no state and
/// `run` returns as soon as it is called.
#[derive(Debug, Default)]
pub struct KafkaServer;

impl KafkaServer {
    pub fn configure(_config: &GatewayConfig) -> Self {
        KafkaServer
    }

    pub async fn run(self) -> Result<()> {
        warn!("GraphQL Server Running with Kafka... (topic resolvers are not implemented, exiting)");
        Ok(())
    }
}
