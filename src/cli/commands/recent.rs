use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ranking::recent_feed;
use crate::db::pool::DbPool;
use crate::db::queries::{load_posts, load_recent_votes};
use crate::errors::{AppError, AppResult};
use crate::models::post::Post;
use crate::utils::date;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { contra, limit } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let limit = limit.unwrap_or(cfg.widget_amount);
        let votes = load_recent_votes(&mut pool, !*contra, limit)?;

        let posts: HashMap<i64, Post> = load_posts(&mut pool)?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let feed = recent_feed(&votes, &posts, date::now());

        let json = serde_json::to_string_pretty(&feed)
            .map_err(|e| AppError::Other(e.to_string()))?;
        println!("{json}");
    }

    Ok(())
}
