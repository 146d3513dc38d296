pub mod request {
    #[cfg(not(feature = "strict-errors"))]
    use crate::modules::pizza::routes::fields::deserialize_lenient_name;
    use crate::modules::pizza::routes::fields::validate_price;
    use crate::modules::pizza::repository::Price;
    use serde::Deserialize;
    use validator::Validate;

    /// Both fields are written even when absent.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        // Only strict mode rejects a non-string name.
        #[serde(default, alias = "pnev")]
        #[cfg_attr(
            not(feature = "strict-errors"),
            serde(deserialize_with = "deserialize_lenient_name")
        )]
        #[validate(
            required(code = "NAME_REQUIRED", message = "Name is required"),
            length(min = 1, code = "NAME_EMPTY", message = "Name must not be empty")
        )]
        pub name: Option<String>,
        #[serde(default, alias = "par")]
        #[validate(
            required(code = "PRICE_REQUIRED", message = "Price is required"),
            custom(function = "validate_price")
        )]
        pub price: Option<Price>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::{
        modules::pizza::repository::{self, WriteOutcome},
        utils,
    };

    pub enum Success {
        PizzaUpdated(WriteOutcome),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PizzaUpdated(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToUpdatePizza(repository::Error),
        #[cfg(feature = "strict-errors")]
        FailedToValidatePayload(validator::ValidationErrors),
        #[cfg(feature = "strict-errors")]
        PizzaNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToUpdatePizza(err) => utils::response::database_error(err),
                #[cfg(feature = "strict-errors")]
                Self::FailedToValidatePayload(errors) => utils::response::invalid_payload(errors),
                #[cfg(feature = "strict-errors")]
                Self::PizzaNotFound => utils::response::not_found(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
