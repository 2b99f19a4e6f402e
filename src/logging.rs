use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber once. `RUST_LOG` overrides the default
/// level. Output goes to stderr so JSON on stdout stays clean.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "huvudbok=debug" } else { "huvudbok=warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init(false);
        super::init(true);
    }
}
