//! Preview server for the generated site

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::PreconditionError;
use crate::Slate;

/// Build the router serving `public_dir` as static files
pub fn router(public_dir: &Path) -> Router {
    let files = ServeDir::new(public_dir).append_index_html_on_directories(true);
    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Check that there is something to serve
pub fn check_public_dir(slate: &Slate) -> Result<(), PreconditionError> {
    if slate.public_dir.is_dir() {
        return Ok(());
    }
    Err(PreconditionError::MissingDirectory {
        path: PathBuf::from(slate.config.public_dir.trim_end_matches('/')),
        hint: "Did you run `slate build`?",
    })
}

/// Resolve the listen address, treating "localhost" as the loopback address
pub fn bind_addr(ip: &str, port: u16) -> Result<SocketAddr> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    Ok(format!("{}:{}", bind_ip, port).parse()?)
}

/// Serve the public directory until the process is stopped
pub async fn start(slate: &Slate, ip: &str, port: u16) -> Result<()> {
    check_public_dir(slate)?;

    let addr = bind_addr(ip, port)?;
    let app = router(&slate.public_dir);

    println!(
        "Serving {}/ at http://{}:{}",
        slate.config.public_dir.trim_end_matches('/'),
        ip,
        port
    );
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
