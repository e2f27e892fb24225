use chrono::NaiveDate;
use serde::Serialize;

/// Registered post metadata. Stands in for the host CMS post table:
/// the host registers id, title, permalink and publish date once, and
/// the rankings and the widget read from here instead of querying the host.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub permalink: String,
    pub published_at: NaiveDate,
    /// Widget suppressed for this post when true.
    pub hidden: bool,
}
