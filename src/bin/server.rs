use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

use plysearch::agents::Agent;
use plysearch::env::{IndexResponse, MoveRequest, MoveResponse, API_VERSION};
use plysearch::game::Maze;
use plysearch::logging;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug, Parser)]
#[command(name = "plysearch server", about = "Serves moves of the search agents.")]
struct Opt {
    /// IP and Port of the webserver.
    #[arg(long, default_value = "127.0.0.1:5001")]
    host: SocketAddr,
    /// Default configuration, requests may override it.
    #[arg(long, default_value_t)]
    config: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt { host, config } = Opt::parse();
    info!("default agent {config}");
    let config = Arc::new(config);

    let index = warp::get().and(warp::path::end()).map(|| {
        debug!("index");
        warp::reply::json(&IndexResponse::new(API_VERSION, AUTHOR, PACKAGE_VERSION))
    });

    let r#move = warp::path("move")
        .and(with_config(config))
        .and(warp::post())
        .and(warp::body::json::<MoveRequest>())
        .and_then(step);

    warp::serve(index.or(r#move)).run(host).await
}

fn with_config(
    config: Arc<Agent>,
) -> impl Filter<Extract = (Arc<Agent>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

fn choose(config: &Agent, request: &MoveRequest) -> plysearch::Result<MoveResponse> {
    let maze = Maze::from_request(request)?;
    let agent = request.config.as_ref().unwrap_or(config);
    agent.validate()?;
    agent.step(&maze)
}

async fn step(config: Arc<Agent>, request: MoveRequest) -> Result<Response, Infallible> {
    let timer = Instant::now();
    // The search is synchronous and may take a while
    let result = tokio::task::spawn_blocking(move || choose(&config, &request)).await;
    info!("response time {:?}ms", timer.elapsed().as_millis());

    Ok(match result {
        Ok(Ok(response)) => {
            info!("move {:?} value={:?}", response.r#move, response.value);
            warp::reply::json(&response).into_response()
        }
        Ok(Err(e)) => {
            error!("invalid request: {e}");
            warp::reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response()
        }
        Err(e) => {
            error!("search failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    })
}
