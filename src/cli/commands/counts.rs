use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{format_percent, percentage};
use crate::db::pool::DbPool;
use crate::db::queries::{count_contra, count_contra_all, count_pro, count_pro_all};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Counts {
        post_id,
        all,
        percent,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let (pro, contra, label) = if *all {
            (
                count_pro_all(&pool.conn)?,
                count_contra_all(&pool.conn)?,
                "All posts".to_string(),
            )
        } else {
            let id = post_id.ok_or_else(|| {
                AppError::Other("pass a post id or use --all".to_string())
            })?;
            (
                count_pro(&pool.conn, id)?,
                count_contra(&pool.conn, id)?,
                format!("Post {id}"),
            )
        };

        if *percent {
            println!(
                "{label} — {GREEN}pro {}%{RESET} / {RED}contra {}%{RESET}",
                format_percent(percentage(pro, contra)),
                format_percent(percentage(contra, pro)),
            );
        } else {
            println!(
                "{label} — {GREEN}pro {pro}{RESET} / {RED}contra {contra}{RESET}"
            );
        }
    }

    Ok(())
}
