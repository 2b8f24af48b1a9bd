use chrono::{DateTime, FixedOffset, Utc};

use super::{escape, path_segment};
use super::layout::page;
use crate::dto::EventView;
use crate::interceptors::Notification;
use crate::services::ListingState;

/// "Monday, October 19, 2026" and "06:30 PM" in the reference zone
pub fn format_event_date(date: &DateTime<Utc>, offset: &FixedOffset) -> (String, String) {
    let local = date.with_timezone(offset);
    (
        local.format("%A, %B %-d, %Y").to_string(),
        local.format("%I:%M %p").to_string(),
    )
}

pub fn render_event_list(
    listing: &ListingState,
    notification: Option<&Notification>,
    offset: &FixedOffset,
) -> String {
    let content = match listing {
        ListingState::Loaded(views) if views.is_empty() => {
            r#"<p class="muted" style="text-align:center">No events have been published yet.</p>"#.to_string()
        }
        ListingState::Loaded(views) => views
            .iter()
            .map(|view| render_event_card(view, offset))
            .collect::<Vec<_>>()
            .join("\n"),
        ListingState::Failed(message) => render_error_state(message),
    };

    let body = format!(
        r#"<main class="container">
<header class="page-header">
<h1>Upcoming Events</h1>
<p>Discover and join amazing events in your area</p>
</header>
<section class="events">
{content}
</section>
</main>"#
    );

    page("Upcoming Events", notification, &body)
}

fn render_error_state(message: &str) -> String {
    format!(
        r#"<div class="card error-state" role="alert">
<h2>We couldn't load events</h2>
<p>{message}</p>
<a class="button" href="/">Try again</a>
</div>"#,
        message = escape(message),
    )
}

fn render_event_card(view: &EventView, offset: &FixedOffset) -> String {
    let event = &view.event;
    let (day, time) = format_event_date(&event.date, offset);

    let category = event
        .category
        .as_deref()
        .map(|category| {
            format!(
                r#"<span class="badge subtle badge-{}">{}</span>"#,
                event.category_color(),
                escape(category)
            )
        })
        .unwrap_or_default();
    let status = event
        .status_badge()
        .map(|badge| {
            format!(
                r#"<span class="badge badge-{}">{}</span>"#,
                event.status_kind().color(),
                escape(&badge)
            )
        })
        .unwrap_or_default();

    let register = if view.register_disabled {
        format!(r#"<button class="button" type="button" disabled>{}</button>"#, view.register_label)
    } else {
        format!(
            r#"<a class="button" href="/register/{}">{}</a>"#,
            path_segment(&event.id),
            view.register_label
        )
    };

    format!(
        r#"<article class="card" data-event-id="{id}">
<header>
<h2>{title}</h2>
<div>{category}{status}</div>
</header>
<p class="muted">{description}</p>
<ul class="meta">
<li class="date">{day}</li>
<li class="time">{time}</li>
<li class="location">{location}</li>
</ul>
<div class="actions">
<button class="button outline" type="button">Learn More</button>
{register}
</div>
</article>"#,
        id = escape(&event.id),
        title = escape(&event.title),
        description = escape(event.description.as_deref().unwrap_or_default()),
        location = escape(event.location.as_deref().unwrap_or_default()),
    )
}
