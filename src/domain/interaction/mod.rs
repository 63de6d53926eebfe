pub mod comment;
pub mod rating;
pub mod repository;
pub mod summary;
