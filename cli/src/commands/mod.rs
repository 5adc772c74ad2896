//! Command implementations

pub mod list_services;
