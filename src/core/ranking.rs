//! Post rankings by net helpfulness, plus the "recently voted" feeds.

use crate::models::post::Post;
use crate::models::vote::{Vote, VoteTotals};
use crate::utils::date::human_time_diff;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

/// One entry of a ranking or recent-votes feed, shaped for the host's
/// widget consumer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPost {
    #[serde(rename = "ID")]
    pub id: i64,
    pub url: String,
    pub name: String,
    pub time: String,
}

/// Posts ranked by pro − contra, best first. Zero-score posts are
/// skipped after the cut, matching the original widget behavior.
pub fn most_helpful(
    entries: &[(Post, VoteTotals)],
    limit: usize,
    now: NaiveDateTime,
) -> Vec<RankedPost> {
    rank_by(entries, limit, now, |t| t.net())
}

/// Posts ranked by contra − pro, worst first.
pub fn least_helpful(
    entries: &[(Post, VoteTotals)],
    limit: usize,
    now: NaiveDateTime,
) -> Vec<RankedPost> {
    rank_by(entries, limit, now, |t| -t.net())
}

fn rank_by<F>(
    entries: &[(Post, VoteTotals)],
    limit: usize,
    now: NaiveDateTime,
    score: F,
) -> Vec<RankedPost>
where
    F: Fn(&VoteTotals) -> i64,
{
    let mut scored: Vec<(&Post, i64)> = entries
        .iter()
        .map(|(post, totals)| (post, score(totals)))
        .collect();

    // Best score first; ties resolve by post id for stable output.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.id.cmp(&b.0.id)));

    scored
        .into_iter()
        .take(limit)
        .filter(|(_, score)| *score != 0)
        .map(|(post, _)| RankedPost {
            id: post.id,
            url: post.permalink.clone(),
            name: post.title.clone(),
            time: format!(
                "Published {} ago",
                human_time_diff(published_midnight(post), now)
            ),
        })
        .collect()
}

/// Feed of the latest pro (or contra) votes, newest first. Votes on
/// unregistered posts fall back to a generic name and empty url.
pub fn recent_feed(
    votes: &[Vote],
    posts: &HashMap<i64, Post>,
    now: NaiveDateTime,
) -> Vec<RankedPost> {
    votes
        .iter()
        .map(|vote| {
            let (url, name) = match posts.get(&vote.post_id) {
                Some(post) => (post.permalink.clone(), post.title.clone()),
                None => (String::new(), format!("Post {}", vote.post_id)),
            };
            RankedPost {
                id: vote.post_id,
                url,
                name,
                time: format!("Submitted {} ago", human_time_diff(vote.time, now)),
            }
        })
        .collect()
}

fn published_midnight(post: &Post) -> NaiveDateTime {
    post.published_at.and_hms_opt(0, 0, 0).unwrap_or_default()
}
