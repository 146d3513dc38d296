pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::{
        modules::pizza::repository::{self, WriteOutcome},
        utils,
    };

    pub enum Success {
        PizzaDeleted(WriteOutcome),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PizzaDeleted(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToDeletePizza(repository::Error),
        #[cfg(feature = "strict-errors")]
        PizzaNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToDeletePizza(err) => utils::response::database_error(err),
                #[cfg(feature = "strict-errors")]
                Self::PizzaNotFound => utils::response::not_found(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
