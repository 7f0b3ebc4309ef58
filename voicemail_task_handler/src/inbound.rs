//! Adapters which drive the domain from the outside world

pub mod handler;
