// GraphQL server for the SERVICE backend
// Serves the gateway schema over HTTP with a Playground console

use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use async_graphql::http::{parse_query_string, playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info};

use crate::engine::graphql::{create_schema, GatewaySchema};
use crate::{GatewayConfig, GatewayError, Result};

/// Path of the GraphQL execution endpoint
pub const GRAPHQL_PATH: &str = "/graphql";

/// Path of the interactive query console
pub const PLAYGROUND_PATH: &str = "/playground";

/// Pre-flight responses may be cached for 24 hours
const CORS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

const CORS_ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";

const CORS_ALLOW_HEADERS: &str =
    "Accept, Authorization, Content-Type, Content-Length, Accept-Encoding";

/// Server that resolves GraphQL operations through microservice endpoints
///
/// Microservices behind this server are called over HTTP and talk to each
/// other directly. Today the schema only carries the placeholder `hello`
/// field, so no remote calls are made yet.
pub struct ServiceServer {
    addr: SocketAddr,
    cors_enabled: bool,
    router: Router,
}

impl ServiceServer {
    /// Build the schema, register routes and resolve the listen address
    pub fn configure(config: &GatewayConfig) -> Result<Self> {
        let addr = resolve_addr(&config.host, &config.server_port)?;

        let schema = create_schema();
        let router = create_router(schema, config.cors_enabled);
        debug!(
            "Registered routes {} and {} (CORS enabled: {})",
            GRAPHQL_PATH, PLAYGROUND_PATH, config.cors_enabled
        );

        Ok(Self {
            addr,
            cors_enabled: config.cors_enabled,
            router,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn cors_enabled(&self) -> bool {
        self.cors_enabled
    }

    /// The configured routes, e.g. for driving requests without a listener
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the listener and serve until the process is terminated
    pub async fn run(self) -> Result<()> {
        let server = axum::Server::try_bind(&self.addr).map_err(|e| GatewayError::Bind {
            addr: self.addr.to_string(),
            reason: e.to_string(),
        })?;

        let port = self.addr.port();
        info!("Starting GraphQL Server with Microservices on port {}...", port);
        info!("🔗 GraphQL endpoint: http://localhost:{}{}", port, GRAPHQL_PATH);
        info!("📊 Playground: http://localhost:{}{}", port, PLAYGROUND_PATH);

        server
            .serve(self.router.into_make_service())
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))
    }
}

impl fmt::Debug for ServiceServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceServer")
            .field("addr", &self.addr)
            .field("cors_enabled", &self.cors_enabled)
            .finish_non_exhaustive()
    }
}

fn resolve_addr(host: &str, port: &str) -> Result<SocketAddr> {
    let port: u16 = port.trim().parse().map_err(|e| {
        GatewayError::Configuration(format!("invalid server port {:?}: {}", port, e))
    })?;

    (host, port)
        .to_socket_addrs()
        .map_err(|e| GatewayError::Configuration(format!("invalid host {:?}: {}", host, e)))?
        .next()
        .ok_or_else(|| GatewayError::Configuration(format!("host {:?} resolved to no address", host)))
}

/// Routes for the service server
pub fn create_router(schema: GatewaySchema, cors_enabled: bool) -> Router {
    let app = Router::new()
        .route(GRAPHQL_PATH, get(graphql_handler).post(graphql_handler))
        .route(PLAYGROUND_PATH, get(playground).post(graphql_handler))
        .route("/health", get(health_check))
        .with_state(schema);

    if cors_enabled {
        // CorsLayer only lists methods and headers on pre-flight replies;
        // the remaining responses get them here.
        app.layer(cors_layer())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(CORS_ALLOW_METHODS),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(CORS_ALLOW_HEADERS),
            ))
    } else {
        app
    }
}

/// Allow any origin; answer every OPTIONS request as a pre-flight
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
        ])
        .max_age(CORS_MAX_AGE)
}

// GraphQL handler
async fn graphql_handler(
    State(schema): State<GatewaySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

// Playground console for browsers; other GET clients have their query executed
async fn playground(
    State(schema): State<GatewaySchema>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    if accepts_html(&headers) {
        return Html(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH))).into_response();
    }

    match parse_query_string(query.as_deref().unwrap_or_default()) {
        Ok(request) => GraphQLResponse::from(schema.execute(request).await).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

/// True when the client asks for HTML and not for JSON
fn accepts_html(headers: &HeaderMap) -> bool {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    accept.contains("text/html") && !accept.contains("application/json")
}

// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "GraphQL Gateway is running!")
}
