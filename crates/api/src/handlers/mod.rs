//! Request handlers.
//!
//! Handlers delegate to [`portfolio_core::catalog::CatalogService`] and map
//! errors via [`crate::error::AppError`].

pub mod catalog;
