#![deny(missing_docs)]
//! Standardized process initialization for lambda binaries.
//! Every `main` should call [Entrypoint::init] before doing anything else so that
//! tracing output is consistent across environments.

use tracing_subscriber::EnvFilter;

mod environment;

pub use environment::{ENVIRONMENT_VAR, EnvErr, Environment, UnknownValue};

/// Describes how the binary should be initialized
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// proof that [Entrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// the [Environment] the subscriber was configured for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl Entrypoint {
    /// create a new instance of [Self] for an explicit [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, install the global tracing subscriber and panic hook
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                // cloudwatch wants one json object per line
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .without_time()
                    .init();
            }
        }

        InitializedEntrypoint { env: self.env }
    }
}
