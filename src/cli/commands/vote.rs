use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_vote;
use crate::errors::{AppError, AppResult};
use crate::models::vote::Vote;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Vote {
        post_id,
        pro,
        contra,
        user,
        time,
    } = cmd
    {
        if *pro == *contra {
            return Err(AppError::InvalidVote(
                "pass exactly one of --pro or --contra".to_string(),
            ));
        }

        let timestamp = match time {
            Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
            None => date::now(),
        };

        let vote = Vote {
            id: 0, // assigned by the database
            post_id: *post_id,
            user: user.clone().unwrap_or_default(),
            pro: *pro,
            contra: *contra,
            time: timestamp,
        };

        let pool = DbPool::new(&cfg.database)?;
        insert_vote(&pool.conn, &vote)?;

        success(format!(
            "Recorded {} vote for post {} at {}",
            if *pro { "pro" } else { "contra" },
            post_id,
            vote.time_str()
        ));
    }

    Ok(())
}
