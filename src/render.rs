//! Card Rendering
//!
//! Turns view-models into HTML fragments. Containers are replaced wholesale
//! with the concatenated cards on every load, so these functions are the
//! whole of the view layer for lists.

use crate::models::{Candidate, Comment, CommunityEvent, FeedItem, Incumbent, Listing};

const NO_VALUE: &str = "—";

/// Anything that can render itself as one card
pub trait Card {
    fn to_card(&self) -> String;
}

/// Concatenate cards; empty input renders an empty container
pub fn render_list<T: Card>(items: &[T]) -> String {
    items.iter().map(Card::to_card).collect()
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped value, or `fallback` when missing or empty
fn field_or(value: Option<&str>, fallback: &str) -> String {
    escape_html(value.filter(|v| !v.is_empty()).unwrap_or(fallback))
}

/// Only web links survive; everything else becomes `#`
pub fn safe_href(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(u) if u.starts_with("http://") || u.starts_with("https://") => escape_html(u),
        _ => "#".to_string(),
    }
}

/// `2026-10-17T18:30:00` -> `2026-10-17 18:30`
pub fn display_timestamp(raw: &str) -> String {
    raw.replacen('T', " ", 1).chars().take(16).collect()
}

/// Event date range with the end only when one exists
pub fn display_range(starts_at: &str, ends_at: Option<&str>) -> String {
    let start = display_timestamp(starts_at);
    match ends_at.filter(|e| !e.is_empty()) {
        Some(end) => format!("{} → {}", start, display_timestamp(end)),
        None => start,
    }
}

impl Card for FeedItem {
    fn to_card(&self) -> String {
        let city = self
            .city
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!(" • {}", escape_html(c)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<li class="card">"#,
                r#"<h3><a href="{}" target="_blank" rel="noopener">{}</a></h3>"#,
                r#"<div class="meta">{} • {} • score {:.2}{}</div>"#,
                r#"<p class="summary">{}</p>"#,
                "</li>"
            ),
            safe_href(self.url.as_deref()),
            escape_html(&self.title),
            field_or(self.category.as_deref(), "news"),
            field_or(self.source.as_deref(), "community"),
            self.importance,
            city,
            field_or(self.summary.as_deref(), ""),
        )
    }
}

impl Card for Listing {
    fn to_card(&self) -> String {
        format!(
            r#"<div class="card"><strong>{}</strong> — ${:.2}<br><small>{} • {}</small><p>{}</p></div>"#,
            escape_html(&self.title),
            self.price,
            field_or(self.category.as_deref(), ""),
            field_or(self.city.as_deref(), ""),
            field_or(self.description.as_deref(), ""),
        )
    }
}

impl Card for CommunityEvent {
    fn to_card(&self) -> String {
        format!(
            r#"<div class="card"><strong>{}</strong><br><small>{} • {} • {}</small><p>{}</p></div>"#,
            escape_html(&self.title),
            escape_html(&display_range(&self.starts_at, self.ends_at.as_deref())),
            field_or(self.venue.as_deref(), ""),
            field_or(self.city.as_deref(), ""),
            field_or(self.description.as_deref(), ""),
        )
    }
}

impl Card for Incumbent {
    fn to_card(&self) -> String {
        format!(
            r#"<div class="card"><strong>{}</strong><br>{} ({})</div>"#,
            escape_html(&self.office.name),
            escape_html(&self.person.full_name),
            field_or(self.person.party.as_deref(), NO_VALUE),
        )
    }
}

impl Card for Candidate {
    fn to_card(&self) -> String {
        format!(
            r#"<div class="card"><strong>{}</strong> ({})<br><small>Status: {} • Race #{}</small><p>{}</p></div>"#,
            escape_html(&self.person.full_name),
            field_or(self.person.party.as_deref(), NO_VALUE),
            field_or(self.candidacy.status.as_deref(), NO_VALUE),
            self.candidacy.race_id,
            field_or(self.candidacy.platform.as_deref(), ""),
        )
    }
}

impl Card for Comment {
    fn to_card(&self) -> String {
        let when = self
            .created_at
            .as_deref()
            .map(|t| format!(" • {}", escape_html(&display_timestamp(t))))
            .unwrap_or_default();
        format!(
            r#"<div class="card comment"><small>{}{}</small><p>{}</p></div>"#,
            field_or(self.author.as_deref(), "anonymous"),
            when,
            escape_html(&self.body),
        )
    }
}
