//! Numbered list rendering and reply formatters.
//!
//! Rendering is pure: it preserves the indices assigned by the scope store
//! and never re-numbers.

use chrono::{DateTime, Utc};

use newsdesk_core::types::{Story, Topic};

use crate::scope::IndexedEntry;

/// Entities with a plain display title, used by the default formatter.
pub trait Titled {
    fn display_title(&self) -> &str;
}

impl Titled for Topic {
    fn display_title(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }
}

impl Titled for Story {
    fn display_title(&self) -> &str {
        &self.title
    }
}

/// Render a stored sequence as `"<index>. <formatted>"` lines.
pub fn numbered_list_with<T>(
    entries: &[IndexedEntry<T>],
    formatter: impl Fn(&T) -> String,
) -> String {
    entries
        .iter()
        .map(|entry| format!("{}. {}", entry.index, formatter(&entry.entity)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a stored sequence with the default display-title formatter.
pub fn numbered_list<T: Titled>(entries: &[IndexedEntry<T>]) -> String {
    numbered_list_with(entries, |entity| entity.display_title().to_string())
}

/// One-line story rendering used in search result lists.
pub fn story_line(story: &Story) -> String {
    let url = story.short_url.as_deref().unwrap_or(&story.url);
    format!(
        "{}, _published {}_ ({})",
        story.title,
        relative_time(story.published),
        url
    )
}

/// Fuller story rendering used by the article-detail command.
pub fn story_detail(story: &Story) -> String {
    let url = story.short_url.as_deref().unwrap_or(&story.url);
    let excerpt = story.excerpt.as_deref().unwrap_or("");
    format!(
        "*{}*\n{}, _published {}_\n{}",
        story.title,
        url,
        relative_time(story.published),
        excerpt
    )
}

/// "3 hours ago" style rendering of a publish timestamp.
pub fn relative_time(published: DateTime<Utc>) -> String {
    relative_time_from(published, Utc::now())
}

fn relative_time_from(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(published);
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}
