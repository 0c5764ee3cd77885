//! Subscriber installation and span definitions per operation:
//! inference, transition, consistency.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::ConfigError;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Calling this more
/// than once is a no-op: the first installed subscriber stays.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::TracingInit {
            message: e.to_string(),
        })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // Err only means a global subscriber is already set.
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    Ok(())
}

/// Create an inference span.
#[macro_export]
macro_rules! inference_span {
    ($query_type:expr, $variable:expr) => {
        tracing::debug_span!("governance.inference", query_type = %$query_type, variable = %$variable)
    };
}

/// Create a state transition span.
#[macro_export]
macro_rules! transition_span {
    ($entity_id:expr) => {
        tracing::debug_span!("governance.transition", entity_id = %$entity_id)
    };
}

/// Create a consistency check span.
#[macro_export]
macro_rules! consistency_span {
    ($check_count:expr) => {
        tracing::info_span!("governance.consistency", checks = $check_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INFERENCE: &str = "governance.inference";
    pub const TRANSITION: &str = "governance.transition";
    pub const CONSISTENCY: &str = "governance.consistency";
}
