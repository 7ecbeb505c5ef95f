// GraphQL API for the gateway
// Root query object and schema construction

use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use tracing::debug;

/// Value returned by the placeholder `hello` field
pub const HELLO_RESPONSE: &str = "world";

// GraphQL Query root
pub struct Query;

#[Object]
impl Query {
    /// Placeholder field; always resolves to "world"
    async fn hello(&self) -> Option<&'static str> {
        Some(HELLO_RESPONSE)
    }
}

// Schema type alias
pub type GatewaySchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create the GraphQL schema
///
/// The gateway defines no mutations or subscriptions yet.
pub fn create_schema() -> GatewaySchema {
    debug!("Building GraphQL schema from root query");
    Schema::build(Query, EmptyMutation, EmptySubscription).finish()
}
