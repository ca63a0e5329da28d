use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::submissions::HashMapSubmissionsStorage;
use clap::Parser;

mod app_context;
mod auth;
mod cli;
mod game;
mod health;
mod http;
mod logging;
mod map;
mod scores;
mod scoring;
mod storage;
mod submissions;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();
    auth::init(&args);
    let app_context = AppContext::<HashMapSubmissionsStorage>::default();
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to serve the HTTP API.");
}
