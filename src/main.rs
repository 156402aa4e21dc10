use clap::Parser;

mod app_context;
mod cli;
mod geo;
mod health;
mod http;
mod logging;
mod page;
mod positioning;
mod sessions;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args);
    sessions::init(&args, &app_context);
    let router = crate::http::router::new(&args, app_context);

    let listener = match tokio::net::TcpListener::bind(args.listen_address).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind to {}: {err}.", args.listen_address);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}.", args.listen_address);
    if let Err(err) = axum::serve(listener, router).await {
        tracing::error!("Server stopped: {err}.");
        std::process::exit(1);
    }
}
