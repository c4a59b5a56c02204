//! Telemetry helpers for applications embedding `linechart-rs`.
//!
//! The engine only emits `tracing` events: scale derivation at `debug`, data
//! set mutations and layout passes at `trace`, dropped input at `warn`. Hosts
//! either call one of the helpers below or install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a compact subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a compact subscriber with an explicit filter directive such as
/// `"linechart_rs=trace"`.
///
/// Returns `false` for an unparsable directive, a disabled `telemetry`
/// feature, or an already-installed global subscriber.
#[must_use]
pub fn init_tracing_with_filter(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directive) else {
            return false;
        };
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
