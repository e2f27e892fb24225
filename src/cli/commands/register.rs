use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_post;
use crate::errors::{AppError, AppResult};
use crate::models::post::Post;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        post_id,
        title,
        url,
        published,
        hidden,
    } = cmd
    {
        let published_at = match published {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let post = Post {
            id: *post_id,
            title: title.clone(),
            permalink: url.clone().unwrap_or_default(),
            published_at,
            hidden: *hidden,
        };

        let pool = DbPool::new(&cfg.database)?;
        upsert_post(&pool.conn, &post)?;

        success(format!(
            "Registered post {} — {} (published {})",
            post.id, post.title, post.published_at
        ));
    }

    Ok(())
}
