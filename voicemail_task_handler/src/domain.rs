//! Everything the voicemail pipeline knows about, independent of aws

pub mod models;
pub mod ports;
pub mod service;
