use tracing_subscriber::EnvFilter;

/// Installs the process-wide JSON subscriber. Called once from `main` so log
/// setup stays an explicit startup step instead of a module-level side effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .init();
}
