pub mod database;
pub mod response;
