//! Demo server: mounts a sample controller set.
//!
//! ```text
//! cargo run --bin demo -- --bind 127.0.0.1:8080
//! curl http://127.0.0.1:8080/api/ping
//! curl http://127.0.0.1:8080/api/ping/whoami
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, Request};
use clap::Parser;

use restmount::http::request::page_info;
use restmount::http::response;
use restmount::observability::logging;
use restmount::{
    compose_key, handler, AppBuilder, Controller, HandlerFuture, ResponseCode, RouteMap,
    ServerConfig, TracingSink,
};

#[derive(Parser)]
#[command(name = "demo")]
#[command(about = "Sample restmount server", long_about = None)]
struct Cli {
    /// Bind address; ignored when --config is given.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Production mode (quieter logs).
    #[arg(short, long)]
    production: bool,
}

struct PingController;

impl Controller for PingController {
    fn get(&self, _req: Request) -> HandlerFuture {
        Box::pin(async { response::success("pong") })
    }

    fn mapping(&self) -> RouteMap {
        let mut map = RouteMap::new();
        map.insert(compose_key("GET", "whoami"), handler(whoami));
        map
    }
}

async fn whoami(_req: Request) -> axum::response::Response {
    response::success(serde_json::json!({ "name": "restmount demo" }))
}

struct ItemController;

impl Controller for ItemController {
    fn get(&self, req: Request) -> HandlerFuture {
        Box::pin(async move {
            let params = Query::<HashMap<String, String>>::try_from_uri(req.uri())
                .map(|query| query.0)
                .unwrap_or_default();

            match page_info(&params, 100) {
                Ok(page) => response::success(serde_json::json!({
                    "pageNo": page.page_no,
                    "pageRow": page.page_row,
                    "items": [],
                })),
                Err(err) => response::error_with_code(ResponseCode::ClientError, &err.to_string()),
            }
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => restmount::load_config(path)?,
        None => {
            let mut config = ServerConfig::default();
            config.bind_address = cli.bind.clone();
            config.production = cli.production;
            config
        }
    };

    logging::init(config.production);
    tracing::info!(bind_address = %config.bind_address, "demo starting");

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    AppBuilder::from_config(&config)
        .error_sink(Arc::new(TracingSink))
        .group(
            "api",
            vec![
                Arc::new(PingController) as Arc<dyn Controller>,
                Arc::new(ItemController) as Arc<dyn Controller>,
            ],
        )
        .serve(listener)
        .await?;

    Ok(())
}
