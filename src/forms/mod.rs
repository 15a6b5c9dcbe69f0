pub mod auth;
pub mod calculator;
