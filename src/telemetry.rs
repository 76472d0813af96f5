//! Opt-in `tracing` setup for hosts and the bundled CLI.
//!
//! Library code only emits events; nothing is printed unless a subscriber is
//! installed here or by the embedding application.

/// Filter used when `RUST_LOG` is unset: engine warnings only.
pub const DEFAULT_LOG_DIRECTIVE: &str = "chart_axis_spacing=warn";
/// Filter used by verbose CLI runs: classification and policy decisions.
pub const VERBOSE_LOG_DIRECTIVE: &str = "chart_axis_spacing=debug";

/// Installs a compact stderr subscriber with [`DEFAULT_LOG_DIRECTIVE`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_LOG_DIRECTIVE)
}

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins over `fallback_directive` when set.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
