// GraphQL Gateway Engine
// This contains the GraphQL schema and its resolvers

//! # Gateway Engine Module
//!
//! The engine layer owns the GraphQL schema. Server variants in `server/`
//! expose it over the network but never define fields themselves.
//!
//! ```text
//! Client (Any Language)
//!        ↓ HTTP/GraphQL
//! Server Layer ← routes, CORS, listener
//!        ↓ Schema::execute
//! Engine Layer (this module) ← root query and resolvers
//! ```

/// GraphQL schema for the gateway
///
/// Contains:
/// - The `Query` root object and its resolvers
/// - The schema type alias and construction function
pub mod graphql;

pub use graphql::{create_schema, GatewaySchema, Query};
