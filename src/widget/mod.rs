//! Front-end voting widget fragment.
//!
//! Counterpart of the host-side shortcode/content-filter glue: given a
//! post and the voter's state, decide whether the widget is visible and
//! render the HTML fragment the host embeds. The framework globals of
//! the original (current post, options, user) are explicit parameters.

use crate::config::Config;
use crate::models::post::Post;

/// Visibility outcome for one post/user combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetView {
    /// Nothing is rendered (post hidden, or vote exists and hiding is on).
    Hidden,
    /// The "already voted" fragment.
    Exists,
    /// The regular voting fragment.
    Vote,
}

/// Apply the visibility conditions. `post` is None for posts that were
/// never registered; those still get the voting fragment.
pub fn resolve_view(post: Option<&Post>, already_voted: bool, cfg: &Config) -> WidgetView {
    if let Some(p) = post
        && p.hidden
    {
        return WidgetView::Hidden;
    }

    if already_voted {
        if cfg.hide_if_voted {
            return WidgetView::Hidden;
        }
        return WidgetView::Exists;
    }

    WidgetView::Vote
}

/// Render the fragment for the resolved view. Hidden renders to an
/// empty string so the host can append it unconditionally.
pub fn render(post_id: i64, view: WidgetView, cfg: &Config) -> String {
    match view {
        WidgetView::Hidden => String::new(),
        WidgetView::Exists => format!(
            r#"<div class="helpful helpful-exists" data-post="{post_id}">
  <div class="helpful-content">{}</div>
</div>
"#,
            cfg.exists_text
        ),
        WidgetView::Vote => format!(
            r#"<div class="helpful" data-post="{post_id}">
  <div class="helpful-content">{}</div>
  <div class="helpful-controls">
    <button class="helpful-pro" data-post="{post_id}" data-value="pro">{}</button>
    <button class="helpful-contra" data-post="{post_id}" data-value="contra">{}</button>
  </div>
</div>
"#,
            cfg.heading, cfg.pro_text, cfg.contra_text
        ),
    }
}
