//! HTTP server construction.

use std::net::TcpListener;

use actix_web::{App, HttpServer, dev::Server, middleware::from_fn, web};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::observability::request_id;
use crate::state::AppState;

/// Build the server on an already-bound listener.
///
/// The returned future runs until SIGINT/SIGTERM, then shuts down gracefully.
/// Binding port 0 lets tests run many servers side by side.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(request_id))
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
