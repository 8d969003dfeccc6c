use std::sync::Arc;

use clap::Parser;
use nutridecode_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env());
    if args.server.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
