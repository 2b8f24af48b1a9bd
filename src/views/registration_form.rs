use super::layout::{page, InputField};
use super::{escape, path_segment};
use crate::dto::RegistrationForm;
use crate::interceptors::Notification;
use crate::utils::FieldErrors;

pub fn render_registration_form(
    event_id: &str,
    form: &RegistrationForm,
    errors: &FieldErrors,
    notification: Option<&Notification>,
) -> String {
    let fields = [
        InputField {
            name: "name",
            label: "Full Name",
            input_type: "text",
            value: &form.name,
            placeholder: "Enter student's full name",
            required: true,
            extra_attributes: "",
            helper: None,
        },
        InputField {
            name: "email",
            label: "Email Address",
            input_type: "email",
            value: &form.email,
            placeholder: "Enter email address (optional)",
            required: false,
            extra_attributes: "",
            helper: None,
        },
        InputField {
            name: "phone",
            label: "Phone Number",
            input_type: "tel",
            value: &form.phone,
            placeholder: "Enter phone number",
            required: true,
            extra_attributes: "",
            helper: None,
        },
        InputField {
            name: "location",
            label: "Location",
            input_type: "text",
            value: &form.location,
            placeholder: "Enter student's full location",
            required: false,
            extra_attributes: "",
            helper: None,
        },
    ];

    let rendered: String = fields.iter().map(|field| field.render(errors)).collect();

    let body = format!(
        r#"<main class="container narrow">
<div class="card">
<header class="page-header">
<h1>Student Registration</h1>
<p>Fill in the details to register a new student</p>
</header>
<form method="post" action="/register/{event_id}" novalidate>
<input type="hidden" name="submission_id" value="{submission_id}">
{rendered}<button class="button wide" type="submit">Register Student</button>
</form>
<p class="helper"><a href="/">Back to events</a></p>
</div>
</main>"#,
        event_id = path_segment(event_id),
        submission_id = escape(&form.submission_id),
    );

    page("Student Registration", notification, &body)
}
