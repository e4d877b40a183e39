//! Row structs and creation DTOs for every marketplace table.

pub mod asset;
pub mod category;
pub mod user;
