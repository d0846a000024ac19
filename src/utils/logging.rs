use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter comes from `CRYPTOTRADE_LOG`, falling back to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("CRYPTOTRADE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
