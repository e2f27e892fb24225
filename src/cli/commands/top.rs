use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ranking::{least_helpful, most_helpful};
use crate::db::pool::DbPool;
use crate::db::queries::load_posts_with_totals;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Top { least, limit } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_posts_with_totals(&mut pool)?;

        let limit = limit.unwrap_or(cfg.widget_amount);
        let now = date::now();

        let ranked = if *least {
            least_helpful(&entries, limit, now)
        } else {
            most_helpful(&entries, limit, now)
        };

        let json = serde_json::to_string_pretty(&ranked)
            .map_err(|e| AppError::Other(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}
