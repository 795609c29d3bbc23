// src/lib.rs

//! pricescout: price research across e-commerce sites.
//!
//! Reads product search specs from a CSV, queries each enabled site for
//! listings, filters them by price range and exclusion terms, writes the
//! matches to a CSV report and emails it.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod utils;
