//! Concrete implementations of the ports in [crate::domain::ports] backed by aws

pub mod connect;
pub mod s3;
