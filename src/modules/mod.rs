pub mod pizza;

mod router;
pub use router::get_router;
