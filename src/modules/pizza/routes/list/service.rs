use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.pizzas
        .find_many()
        .await
        .map(response::Success::Pizzas)
        .map_err(response::Error::FailedToFetchPizzas)
}
