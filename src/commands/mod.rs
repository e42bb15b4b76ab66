pub mod help;
pub mod resolver;

use serenity::builder::CreateMessage;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{error, info, warn};

pub use resolver::Resolver;

/// Keyword for the resolver: for `/cmd@botname args` it is `cmd` (lower-cased),
/// for anything else it is the whole trimmed text.
pub fn extract_keyword(content: &str) -> String {
    let content = content.trim();

    match content.strip_prefix('/') {
        Some(rest) => {
            let token = rest.split_whitespace().next().unwrap_or_default();
            let command = token.split('@').next().unwrap_or_default();
            command.to_lowercase()
        }
        None => content.to_string(),
    }
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    info!("User [{}] {}", msg.author.name, msg.content);

    let keyword = extract_keyword(&msg.content);
    if keyword.is_empty() {
        return;
    }

    let resolver = {
        let data = ctx.data.read().await;
        match data.get::<crate::ReplyResolver>() {
            Some(resolver) => resolver.clone(),
            None => {
                warn!("Resolver not initialized, dropping message");
                return;
            }
        }
    };

    // One message at a time: the lock is held until the reply text is built
    let reply = {
        let resolver = resolver.lock().await;
        resolver.resolve(&keyword).await
    };

    if reply.is_empty() {
        return;
    }

    let message = CreateMessage::new().content(reply).reference_message(msg);

    if let Err(e) = msg.channel_id.send_message(ctx, message).await {
        error!("❌ Failed to send reply for {}: {}", keyword, e);
    }
}
