mod app;
mod modules;
mod types;
mod utils;

use crate::{
    app::App,
    types::{Config, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::default();
    let listener = match App::bind(&config.app).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(
                "Failed to bind {}:{}: {}",
                config.app.host,
                config.app.port,
                err
            );
            std::process::exit(1);
        }
    };

    let ctx = Arc::new(config.to_context().await);

    if let Err(err) = App::new(ctx).serve(listener).await {
        tracing::error!("Server stopped: {}", err);
        std::process::exit(1);
    }
}
