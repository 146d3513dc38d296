use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;
#[cfg(feature = "strict-errors")]
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    #[cfg(feature = "strict-errors")]
    payload
        .validate()
        .map_err(response::Error::FailedToValidatePayload)?;

    ctx.pizzas
        .create(payload.into())
        .await
        .map_err(response::Error::FailedToCreatePizza)
        .map(response::Success::PizzaCreated)
}
