use super::escape;
use super::layout::{field, page, InputField};
use crate::dto::EventForm;
use crate::interceptors::Notification;
use crate::utils::validation::DESCRIPTION_MAX_CHARS;
use crate::utils::FieldErrors;

/// `min_date` is the earliest selectable day, formatted `YYYY-MM-DD`.
pub fn render_event_form(
    form: &EventForm,
    errors: &FieldErrors,
    notification: Option<&Notification>,
    min_date: &str,
) -> String {
    let title = InputField {
        name: "title",
        label: "Event Title",
        input_type: "text",
        value: &form.title,
        placeholder: "Enter event title",
        required: true,
        extra_attributes: "",
        helper: None,
    };

    let description_control = format!(
        r#"<textarea id="description" name="description" rows="4" placeholder="Enter event description (optional)">{}</textarea>"#,
        escape(&form.description)
    );
    let counter = format!("{}/{} characters", form.description.chars().count(), DESCRIPTION_MAX_CHARS);
    let description = field("description", "Description", false, &description_control, Some(&counter), errors);

    let date_min = format!(r#" min="{}T00:00""#, escape(min_date));
    let date = InputField {
        name: "date",
        label: "Event Date",
        input_type: "datetime-local",
        value: &form.date,
        placeholder: "",
        required: true,
        extra_attributes: &date_min,
        helper: Some("Select the date and time for your event"),
    };

    let location = InputField {
        name: "location",
        label: "Location",
        input_type: "text",
        value: &form.location,
        placeholder: "Enter event location (optional)",
        required: false,
        extra_attributes: "",
        helper: None,
    };

    let capacity = InputField {
        name: "capacity",
        label: "Capacity",
        input_type: "number",
        value: &form.capacity,
        placeholder: "Enter maximum capacity (optional)",
        required: false,
        extra_attributes: r#" min="1" max="10000" step="1""#,
        helper: Some("Maximum number of attendees (leave empty for unlimited)"),
    };

    let body = format!(
        r#"<main class="container narrow">
<div class="card">
<header class="page-header">
<h1>Create New Event</h1>
<p>Fill in the details to create a new event</p>
</header>
<form method="post" action="/register/events" novalidate>
<input type="hidden" name="submission_id" value="{submission_id}">
{title}{description}{date}{location}{capacity}<button class="button wide" type="submit">Create Event</button>
</form>
</div>
</main>"#,
        submission_id = escape(&form.submission_id),
        title = title.render(errors),
        description = description,
        date = date.render(errors),
        location = location.render(errors),
        capacity = capacity.render(errors),
    );

    page("Create New Event", notification, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_values_and_shows_inline_errors() {
        let form = EventForm {
            submission_id: "form-1".to_string(),
            title: "Spring \"Fest\"".to_string(),
            description: "Fun".to_string(),
            date: "2026-10-17T10:00".to_string(),
            ..EventForm::default()
        };
        let errors = FieldErrors::from_checks([("date", "Event date cannot be in the past".to_string())]);

        let html = render_event_form(&form, &errors, None, "2026-10-18");

        assert!(html.contains(r#"value="Spring &quot;Fest&quot;""#));
        assert!(html.contains(r#"<p class="field-error">Event date cannot be in the past</p>"#));
        assert!(html.contains("3/500 characters"));
        assert!(html.contains(r#"min="2026-10-18T00:00""#));
        assert!(html.contains(r#"<input type="hidden" name="submission_id" value="form-1">"#));
    }

    #[test]
    fn notification_is_rendered() {
        let notification = Notification::success("Event Created Successfully", "Event \"Gala\" has been created!");
        let html = render_event_form(&EventForm::default(), &FieldErrors::default(), Some(&notification), "2026-10-18");

        assert!(html.contains("Event Created Successfully"));
        assert!(html.contains("Event &quot;Gala&quot; has been created!"));
    }
}
