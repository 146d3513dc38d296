use crate::types::Context;
use axum::Router;
use std::sync::Arc;

use super::pizza;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest("/pizza", pizza::routes::get_router())
}
