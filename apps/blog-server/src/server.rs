//! HTTP server lifecycle: bind, serve, stop.

use std::io;
use std::net::{SocketAddr, TcpListener};

use actix_web::dev::ServerHandle;
use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer, web};
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::error::json_error_handler;
use crate::observability::propagate_request_id;
use crate::state::AppState;

/// Register application data, the JSON extractor config and all routes.
///
/// Shared by the real server and in-process tests.
pub fn configure_app(
    state: AppState,
    json_body_limit: usize,
) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
    let data = web::Data::new(state);

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(data.clone()).app_data(
            web::JsonConfig::default()
                .limit(json_body_limit)
                .error_handler(json_error_handler),
        );
        handlers::configure_routes(cfg);
    }
}

/// Bind to the configured address and start serving.
///
/// Resolves once the listener is bound, so requests may be issued as soon as
/// this returns.
pub async fn start(config: &AppConfig, state: AppState) -> io::Result<RunningServer> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    let addr = listener.local_addr()?;
    let configure = configure_app(state, config.json_body_limit);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(propagate_request_id))
            .wrap(TracingLogger::default())
            .configure(configure.clone())
    })
    .workers(config.workers)
    .listen(listener)?
    .run();

    let handle = server.handle();
    let task = tokio::spawn(server);

    tracing::info!(%addr, workers = config.workers, "HTTP server started");

    Ok(RunningServer { addr, handle, task })
}

/// A running server, returned by [`start`].
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
}

impl RunningServer {
    /// The bound address. Useful when the configured port was `0`.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop gracefully, resolving once in-flight requests are done and the server has exited.
    pub async fn stop(self) -> io::Result<()> {
        self.handle.stop(true).await;
        let addr = self.addr;
        self.wait().await?;
        tracing::info!(%addr, "HTTP server stopped");
        Ok(())
    }

    /// Wait until the server exits on its own (e.g. on SIGINT/SIGTERM).
    pub async fn wait(self) -> io::Result<()> {
        self.task.await.map_err(io::Error::other)?
    }
}
