//! Opt-in `tracing` setup for hosts embedding `calc-engine`.
//!
//! The engine only emits events: `trace!` per dispatched command, `debug!` on
//! clears, error transitions and snapshot restores. Nothing is printed unless
//! the host installs a subscriber, either its own or one of the helpers below.

/// Filter used when `RUST_LOG` is unset: engine warnings only.
pub const DEFAULT_TRACING_DIRECTIVES: &str = "calc_engine=warn";

/// Installs a compact stderr subscriber filtered by [`DEFAULT_TRACING_DIRECTIVES`].
///
/// `RUST_LOG` overrides the default filter. Returns `false` when the
/// `telemetry` feature is disabled or a global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_DIRECTIVES)
}

/// Like [`init_default_tracing`] with caller-chosen fallback directives,
/// e.g. `calc_engine=trace` to log every dispatched command.
#[must_use]
pub fn init_tracing(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_directives))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_DIRECTIVES));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
