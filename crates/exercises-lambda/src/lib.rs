//! exercises-lambda
//!
//! HTTP surface of the exercise catalog, served as an axum router inside
//! AWS Lambda.

pub mod app;
pub mod error;
pub mod middleware;
pub mod request_id;
pub mod response;
pub mod routes;
pub mod state;
