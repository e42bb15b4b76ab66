use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod models;
mod regions;
mod services;
mod utils;

use api::upstream::UpstreamClient;
use commands::Resolver;
use config::Config;
use regions::RegionCatalog;

struct Handler;

/// Shared resolver; the mutex keeps reply resolution strictly sequential
pub struct ReplyResolver;

impl TypeMapKey for ReplyResolver {
    type Value = Arc<Mutex<Resolver<UpstreamClient>>>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Authorized on account {}", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("covid_bot=debug,serenity=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🤖 Starting covid bot...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let upstream = match UpstreamClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create upstream client: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = RegionCatalog::new(config.regions_file.clone());
    info!("Region catalog: {}", catalog.path().display());

    let resolver = Resolver::new(upstream, catalog);

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<ReplyResolver>(Arc::new(Mutex::new(resolver)));
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
        std::process::exit(1);
    }
}
