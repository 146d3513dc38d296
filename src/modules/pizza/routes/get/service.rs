use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let pizzas = ctx
        .pizzas
        .find_by_id(payload.id)
        .await
        .map_err(response::Error::FailedToFetchPizza)?;

    #[cfg(feature = "strict-errors")]
    if pizzas.is_empty() {
        return Err(response::Error::PizzaNotFound);
    }

    Ok(response::Success::Pizzas(pizzas))
}
