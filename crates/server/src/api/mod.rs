pub mod analyze;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod runs;

pub use routes::create_router;
