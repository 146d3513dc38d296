mod create;
mod delete;
mod fields;
mod get;
mod list;
mod update;


use crate::types::Context;
use axum::routing::{self, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", routing::get(list::handler).post(create::handler))
        .route(
            "/:id",
            routing::get(get::handler)
                .put(update::handler)
                .delete(delete::handler),
        )
}
