//! Turns voicemail recordings landing in s3 into follow up tasks in Amazon Connect.
//! The crate follows the hexagonal layout: [domain] holds the pipeline and its ports,
//! [outbound] adapts the aws clients to those ports and [inbound] adapts the lambda event.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
