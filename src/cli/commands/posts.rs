use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_posts_with_totals;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET, color_for_score};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let entries = load_posts_with_totals(&mut pool)?;

    if entries.is_empty() {
        println!("No posts registered.");
        return Ok(());
    }

    for (post, totals) in entries {
        let net = totals.net();
        let marker = if post.hidden {
            format!(" {GREY}[hidden]{RESET}")
        } else {
            String::new()
        };

        println!(
            "#{:<6} {} — pro {} / contra {} (net {}{:+}{}){}",
            post.id,
            post.title,
            totals.pro,
            totals.contra,
            color_for_score(net),
            net,
            RESET,
            marker,
        );
    }

    Ok(())
}
