use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON logging on stderr for processes embedding appctl.
///
/// The library itself never installs a subscriber; binaries that want its
/// events call this once at startup. When `quiet` is true only error-level
/// events are emitted, otherwise info-level and above. `RUST_LOG` directives
/// are honored on top of the default.
///
/// Returns an error if a global subscriber was already installed.
pub fn init_logging(quiet: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = if quiet { "appctl=error" } else { "appctl=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_reports_error() {
        // The first call may fail if another test installed a subscriber,
        // but a second call must never succeed.
        let _ = init_logging(true);
        assert!(init_logging(true).is_err());
    }
}
