//! Web display surface
//!
//! A single page with a question box, the chain's progress feed and the
//! final answer. Answers can be rendered on submit (`/`) or streamed
//! live over Server-Sent Events (`/stream`).

pub mod error;
pub mod page;
pub mod routes;

pub use error::AppError;
pub use page::PageRenderer;
pub use routes::{AppState, AskQuery, router};

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the page until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Serving question page");
    axum::serve(listener, router(state)).await
}
