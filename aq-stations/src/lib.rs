//! Air-quality monitoring station fetcher.
//!
//! Pulls station metadata and per-station installation listings from the
//! GIOŚ PJP REST API and assembles them into an in-memory dataset where
//! every station owns the installations measured there.

pub mod domain;
pub mod fetch;
pub mod gios;
