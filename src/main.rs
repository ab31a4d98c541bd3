use minihttpd::config::Config;
use minihttpd::server::listener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    let listener = match listener::bind(&cfg) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Setup failed: {:#}", e);
            std::process::exit(1);
        }
    };

    tokio::select! {
        res = listener::serve(listener, cfg) => {
            // The accept loop only returns on an accept failure.
            if let Err(e) = res {
                tracing::error!("Accept loop exited: {:#}", e);
            }
            std::process::exit(254);
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
