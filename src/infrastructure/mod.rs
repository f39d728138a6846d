//! Infrastructure layer - Storage, services and runtime plumbing

pub mod auth;
pub mod logging;
pub mod observability;
pub mod project;
pub mod seed;
pub mod storage;
pub mod team;
