pub mod request {
    #[cfg(not(feature = "strict-errors"))]
    use crate::modules::pizza::routes::fields::deserialize_lenient_name;
    use crate::modules::pizza::routes::fields::validate_price;
    use crate::modules::pizza::repository::{PizzaPayload, Price};
    use serde::Deserialize;
    use validator::Validate;

    // `pnev` and `par` are the column names older clients send.
    #[derive(Deserialize, Validate)]
    pub struct Payload {
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

    impl From<Payload> for PizzaPayload {
        fn from(payload: Payload) -> Self {
            Self {
                name: payload.name,
                price: payload.price,
            }
        }
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::{
        modules::pizza::repository::{self, Pizza},
        utils,
    };

    pub enum Success {
        PizzaCreated(Pizza),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PizzaCreated(pizza) => (StatusCode::CREATED, Json(pizza)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToCreatePizza(repository::Error),
        #[cfg(feature = "strict-errors")]
        FailedToValidatePayload(validator::ValidationErrors),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToCreatePizza(err) => utils::response::database_error(err),
                #[cfg(feature = "strict-errors")]
                Self::FailedToValidatePayload(errors) => utils::response::invalid_payload(errors),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
