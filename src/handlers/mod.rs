pub mod auth;
pub mod directors;
pub mod movies;
