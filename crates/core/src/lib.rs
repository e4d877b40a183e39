//! Domain types and pure catalog logic for the CreatorHub marketplace.
//!
//! This crate has no database or HTTP dependencies. The repository and API
//! layers pass plain values in and get plain values back.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
