pub mod interaction;
pub mod recipe;
pub mod shared;
