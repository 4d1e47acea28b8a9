//! corsgate gateway binary.
//!
//! - Loads `corsgate.yaml` (strict parsing + validate), with
//!   `CORSGATE_ALLOWED_ORIGINS` overriding the origin list.
//! - Compiles the allow-list once into the gatekeeper.
//! - Serves `/healthz` and `/metrics` behind the CORS layer.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use corsgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("corsgate.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "corsgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
