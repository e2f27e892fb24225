use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::distinct_years;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let years = distinct_years(&mut pool)?;

    if years.is_empty() {
        println!("No votes recorded yet.");
        return Ok(());
    }

    for year in years {
        println!("{year}");
    }

    Ok(())
}
