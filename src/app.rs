use crate::{
    modules,
    types::{AppConfig, Context},
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn router(ctx: Arc<Context>) -> Router {
    Router::new()
        .merge(modules::get_router())
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 64))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    /// Bound before the database is contacted so the port is open even while
    /// the connection attempt is still pending.
    pub async fn bind(config: &AppConfig) -> std::io::Result<TcpListener> {
        TcpListener::bind(format!("{}:{}", config.host, config.port)).await
    }

    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        tracing::info!(
            "Server is listening on {}:{}",
            self.ctx.app.host,
            self.ctx.app.port
        );

        axum::serve(listener, self.router).await
    }
}
