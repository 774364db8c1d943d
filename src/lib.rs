//! ToolHub - Tool Catalog Service
//!
//! This crate implements a small catalog of hand tools exposed over a JSON
//! REST API, persisted either to a JSON file or to PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
