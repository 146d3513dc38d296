use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let outcome = ctx
        .pizzas
        .delete_by_id(payload.id)
        .await
        .map_err(response::Error::FailedToDeletePizza)?;

    #[cfg(feature = "strict-errors")]
    if outcome.affected_rows == 0 {
        return Err(response::Error::PizzaNotFound);
    }

    Ok(response::Success::PizzaDeleted(outcome))
}
