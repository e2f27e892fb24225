use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::post::Post;
use crate::models::vote::{Vote, VoteTotals};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn map_vote_row(row: &Row) -> Result<Vote> {
    let time_str: String = row.get("time")?;

    let time = NaiveDateTime::parse_from_str(&time_str, TIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    Ok(Vote {
        id: row.get("id")?,
        post_id: row.get("post_id")?,
        user: row.get("user")?,
        pro: row.get::<_, i64>("pro")? == 1,
        contra: row.get::<_, i64>("contra")? == 1,
        time,
    })
}

pub fn map_post_row(row: &Row) -> Result<Post> {
    let date_str: String = row.get("published_at")?;

    let published_at = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Post {
        id: row.get("id")?,
        title: row.get("title")?,
        permalink: row.get("permalink")?,
        published_at,
        hidden: row.get::<_, i64>("hidden")? == 1,
    })
}

pub fn insert_vote(conn: &Connection, vote: &Vote) -> AppResult<()> {
    conn.execute(
        "INSERT INTO votes (post_id, user, pro, contra, time)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            vote.post_id,
            vote.user,
            if vote.pro { 1 } else { 0 },
            if vote.contra { 1 } else { 0 },
            vote.time.format(TIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Pro count for one post.
pub fn count_pro(conn: &Connection, post_id: i64) -> AppResult<u64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM votes WHERE pro = 1 AND post_id = ?1",
        [post_id],
        |row| row.get(0),
    )?;
    Ok(n as u64)
}

/// Contra count for one post.
pub fn count_contra(conn: &Connection, post_id: i64) -> AppResult<u64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM votes WHERE contra = 1 AND post_id = ?1",
        [post_id],
        |row| row.get(0),
    )?;
    Ok(n as u64)
}

/// Pro count over all posts.
pub fn count_pro_all(conn: &Connection) -> AppResult<u64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM votes WHERE pro = 1", [], |row| {
        row.get(0)
    })?;
    Ok(n as u64)
}

/// Contra count over all posts.
pub fn count_contra_all(conn: &Connection) -> AppResult<u64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM votes WHERE contra = 1", [], |row| {
        row.get(0)
    })?;
    Ok(n as u64)
}

/// Votes with a date inside [from, to], inclusive, ordered by time.
pub fn load_votes_between(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Vote>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM votes
         WHERE date(time) >= ?1 AND date(time) <= ?2
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(
        [from.to_string(), to.to_string()],
        map_vote_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every vote row, ordered by time.
pub fn load_all_votes(pool: &mut DbPool) -> AppResult<Vec<Vote>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM votes ORDER BY time ASC")?;
    let rows = stmt.query_map([], map_vote_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct years present in the votes table, newest first.
pub fn distinct_years(pool: &mut DbPool) -> AppResult<Vec<i32>> {
    let mut stmt = pool.conn.prepare(
        "SELECT DISTINCT CAST(strftime('%Y', time) AS INTEGER) AS year
         FROM votes ORDER BY year DESC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, i32>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Whether the given voter token already voted on this post.
/// Empty tokens are anonymous and never match.
pub fn has_voted(conn: &Connection, post_id: i64, user: &str) -> AppResult<bool> {
    if user.is_empty() {
        return Ok(false);
    }
    let mut stmt =
        conn.prepare("SELECT 1 FROM votes WHERE post_id = ?1 AND user = ?2 LIMIT 1")?;
    Ok(stmt.exists(params![post_id, user])?)
}

/// The latest pro (or contra) votes, newest first.
pub fn load_recent_votes(pool: &mut DbPool, pro: bool, limit: usize) -> AppResult<Vec<Vote>> {
    let column = if pro { "pro" } else { "contra" };
    let sql = format!(
        "SELECT * FROM votes WHERE {column} = 1 ORDER BY id DESC LIMIT ?1"
    );

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map([limit as i64], map_vote_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Pro/contra totals for one post.
pub fn totals_for_post(conn: &Connection, post_id: i64) -> AppResult<VoteTotals> {
    Ok(VoteTotals {
        pro: count_pro(conn, post_id)?,
        contra: count_contra(conn, post_id)?,
    })
}

pub fn upsert_post(conn: &Connection, post: &Post) -> AppResult<()> {
    conn.execute(
        "INSERT INTO posts (id, title, permalink, published_at, hidden)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             title = excluded.title,
             permalink = excluded.permalink,
             published_at = excluded.published_at,
             hidden = excluded.hidden",
        params![
            post.id,
            post.title,
            post.permalink,
            post.published_at.to_string(),
            if post.hidden { 1 } else { 0 },
        ],
    )?;
    Ok(())
}

pub fn load_post(conn: &Connection, post_id: i64) -> AppResult<Option<Post>> {
    let mut stmt = conn.prepare("SELECT * FROM posts WHERE id = ?1")?;
    Ok(stmt.query_row([post_id], map_post_row).optional()?)
}

pub fn load_posts(pool: &mut DbPool) -> AppResult<Vec<Post>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM posts ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_post_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Registered posts together with their vote totals.
/// Posts without votes come back with zero totals so the ranking can
/// skip them on score.
pub fn load_posts_with_totals(pool: &mut DbPool) -> AppResult<Vec<(Post, VoteTotals)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT p.id, p.title, p.permalink, p.published_at, p.hidden,
                COALESCE(SUM(v.pro), 0)    AS pro_total,
                COALESCE(SUM(v.contra), 0) AS contra_total
         FROM posts p
         LEFT JOIN votes v ON v.post_id = p.id
         GROUP BY p.id
         ORDER BY p.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let post = map_post_row(row)?;
        let totals = VoteTotals {
            pro: row.get::<_, i64>("pro_total")? as u64,
            contra: row.get::<_, i64>("contra_total")? as u64,
        };
        Ok((post, totals))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
