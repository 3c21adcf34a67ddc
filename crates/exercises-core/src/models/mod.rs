pub mod exercise;
pub mod response;
