use sdd_chat_api::config::ChatConfig;
use sdd_chat_api::handler::handle;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    // The environment is read once here at the function edge; everything
    // below takes the config as a value.
    let cfg = ChatConfig::from_env();
    handle(req, &cfg).await
}
