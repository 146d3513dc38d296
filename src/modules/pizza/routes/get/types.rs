pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::{
        modules::pizza::repository::{self, Pizza},
        utils,
    };

    /// Zero or one pizza, always as an array.
    pub enum Success {
        Pizzas(Vec<Pizza>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Pizzas(pizzas) => (StatusCode::OK, Json(pizzas)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPizza(repository::Error),
        #[cfg(feature = "strict-errors")]
        PizzaNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPizza(err) => utils::response::database_error(err),
                #[cfg(feature = "strict-errors")]
                Self::PizzaNotFound => utils::response::not_found(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
