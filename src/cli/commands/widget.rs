use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{has_voted, load_post};
use crate::errors::AppResult;
use crate::widget::{render, resolve_view};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Widget { post_id, user } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let post = load_post(&pool.conn, *post_id)?;
        let voted = match user {
            Some(u) => has_voted(&pool.conn, *post_id, u)?,
            None => false,
        };

        let view = resolve_view(post.as_ref(), voted, cfg);
        let html = render(*post_id, view, cfg);

        // Empty output is meaningful: the host appends it unconditionally.
        print!("{html}");
    }

    Ok(())
}
