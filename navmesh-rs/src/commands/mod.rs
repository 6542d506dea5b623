//! Command implementations for the navmesh-rs CLI

pub mod convert;
pub mod info;
pub mod validate;
