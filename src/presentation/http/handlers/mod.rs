pub mod auth;
pub mod health;
pub mod interactions;
pub mod recipes;
