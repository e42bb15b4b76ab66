use tracing::{debug, error};

use super::help::{help_text, TROLL_TEXT};
use crate::api::upstream::{ApiError, Upstream};
use crate::regions::RegionCatalog;
use crate::services::{aggregate_service, currency_service, region_service};

/// Reply sent when any upstream fetch for a command fails
pub const DATA_UNAVAILABLE: &str = "⚠️ Данные временно недоступны, попробуйте позже.";

/// A single-region command: keyword, region code, help label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCommand {
    pub keyword: &'static str,
    pub code: &'static str,
    pub label: &'static str,
}

pub const REGION_COMMANDS: [RegionCommand; 6] = [
    RegionCommand { keyword: "mos", code: "RU-MOS", label: "Московская область" },
    RegionCommand { keyword: "mow", code: "RU-MOW", label: "Москва" },
    RegionCommand { keyword: "yar", code: "RU-YAR", label: "Ярославская область" },
    RegionCommand { keyword: "spb", code: "RU-SPE", label: "Санкт-Петербург" },
    RegionCommand { keyword: "lenobl", code: "RU-LEN", label: "Ленинградская область" },
    RegionCommand { keyword: "kda", code: "RU-KDA", label: "Краснодарский край" },
];

const YAROSLAVL: &str = "RU-YAR";

/// Every command the bot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Region(&'static str),
    Russia,
    RussiaAndYaroslavl,
    Currencies,
    Help,
    Troll,
}

impl Command {
    /// Map a keyword to its command. Unknown keywords have no command.
    pub fn parse(keyword: &str) -> Option<Command> {
        if let Some(region) = REGION_COMMANDS.iter().find(|c| c.keyword == keyword) {
            return Some(Command::Region(region.code));
        }

        match keyword {
            "rus" => Some(Command::Russia),
            "rusyar" => Some(Command::RussiaAndYaroslavl),
            "cur" => Some(Command::Currencies),
            "help" | "start" => Some(Command::Help),
            "troll" => Some(Command::Troll),
            _ => None,
        }
    }
}

/// Turns command keywords into reply text using the upstream sources and
/// the region catalog. Upstream failures never escape: they are logged and
/// the reply becomes [`DATA_UNAVAILABLE`].
pub struct Resolver<U> {
    upstream: U,
    catalog: RegionCatalog,
}

impl<U: Upstream> Resolver<U> {
    pub fn new(upstream: U, catalog: RegionCatalog) -> Self {
        Self { upstream, catalog }
    }

    /// Reply text for `keyword`; empty means nothing should be sent
    pub async fn resolve(&self, keyword: &str) -> String {
        let Some(command) = Command::parse(keyword) else {
            debug!("Ignoring unknown keyword {:?}", keyword);
            return String::new();
        };

        match self.execute(command).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("❌ Error executing command {:?}: {}", command, e);
                DATA_UNAVAILABLE.to_string()
            }
        }
    }

    async fn execute(&self, command: Command) -> Result<String, ApiError> {
        match command {
            Command::Region(code) => {
                region_service::get_region_report(&self.upstream, &self.catalog, code).await
            }
            Command::Russia => aggregate_service::get_aggregate_report(&self.upstream).await,
            Command::RussiaAndYaroslavl => {
                let russia = aggregate_service::get_aggregate_report(&self.upstream).await?;
                let yaroslavl =
                    region_service::get_region_report(&self.upstream, &self.catalog, YAROSLAVL)
                        .await?;
                Ok(format!("{}\n{}", russia, yaroslavl))
            }
            Command::Currencies => currency_service::get_currency_report(&self.upstream).await,
            Command::Help => Ok(help_text()),
            Command::Troll => Ok(TROLL_TEXT.to_string()),
        }
    }
}
