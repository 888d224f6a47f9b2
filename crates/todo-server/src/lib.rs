pub mod app;
pub mod config;
pub mod maintenance;

const DEFAULT_FILTER: &str = "todo_server=debug,todo_api=debug,todo_db=info,tower_http=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}
