use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `votes` table. Vote rows are append-only; exactly one of
/// pro/contra is 1 per row (enforced by CHECK).
fn create_votes_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS votes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id   INTEGER NOT NULL,
            user      TEXT NOT NULL DEFAULT '',
            pro       INTEGER NOT NULL DEFAULT 0 CHECK(pro IN (0,1)),
            contra    INTEGER NOT NULL DEFAULT 0 CHECK(contra IN (0,1)),
            time      TEXT NOT NULL,
            CHECK(pro + contra = 1)
        );

        CREATE INDEX IF NOT EXISTS idx_votes_post ON votes(post_id);
        CREATE INDEX IF NOT EXISTS idx_votes_time ON votes(time);
        CREATE INDEX IF NOT EXISTS idx_votes_post_user ON votes(post_id, user);
        "#,
    )?;
    Ok(())
}

/// Create the `posts` metadata registry.
fn create_posts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id           INTEGER PRIMARY KEY,
            title        TEXT NOT NULL,
            permalink    TEXT NOT NULL DEFAULT '',
            published_at TEXT NOT NULL,
            hidden       INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "votes")? {
        create_votes_table(conn)?;
        if !migration_applied(conn, "20260801_0001_create_votes")? {
            mark_applied(conn, "20260801_0001_create_votes", "Created votes table")?;
            success("Created votes table.");
        }
    } else {
        // Databases created before the indexes existed still get them.
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_votes_post ON votes(post_id);
            CREATE INDEX IF NOT EXISTS idx_votes_time ON votes(time);
            CREATE INDEX IF NOT EXISTS idx_votes_post_user ON votes(post_id, user);
            "#,
        )?;
    }

    if !table_exists(conn, "posts")? {
        create_posts_table(conn)?;
        if !migration_applied(conn, "20260801_0002_create_posts")? {
            mark_applied(conn, "20260801_0002_create_posts", "Created posts table")?;
            success("Created posts table.");
        }
    }

    Ok(())
}
