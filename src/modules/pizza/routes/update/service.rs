use super::types::{request, response};
use crate::{modules::pizza::repository, types::Context};
use std::sync::Arc;
#[cfg(feature = "strict-errors")]
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    #[cfg(feature = "strict-errors")]
    payload
        .body
        .validate()
        .map_err(response::Error::FailedToValidatePayload)?;

    let outcome = ctx
        .pizzas
        .update_by_id(
            payload.id,
            repository::PizzaPayload {
                name: payload.body.name,
                price: payload.body.price,
            },
        )
        .await
        .map_err(response::Error::FailedToUpdatePizza)?;

    #[cfg(feature = "strict-errors")]
    if outcome.affected_rows == 0 {
        return Err(response::Error::PizzaNotFound);
    }

    Ok(response::Success::PizzaUpdated(outcome))
}
