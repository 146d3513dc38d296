pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    use crate::{
        modules::pizza::repository::{self, Pizza},
        utils,
    };

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
        FailedToFetchPizzas(repository::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPizzas(err) => utils::response::database_error(err),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
