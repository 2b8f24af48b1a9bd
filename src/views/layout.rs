use super::escape;
use crate::interceptors::Notification;
use crate::utils::FieldErrors;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f7fafc; color: #1a202c; margin: 0; }
.container { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
.container.narrow { max-width: 560px; }
.page-header { text-align: center; margin-bottom: 2rem; }
.page-header p, .muted { color: #718096; }
.card { background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,.06); padding: 1.25rem; margin-bottom: 1.5rem; }
.badge { display: inline-block; font-size: .75rem; font-weight: 600; padding: .1rem .5rem; border-radius: 4px; margin-right: .5rem; }
.badge-green { background: #38a169; color: #fff; } .badge-red { background: #e53e3e; color: #fff; }
.badge-gray { background: #a0aec0; color: #fff; } .badge-blue { background: #3182ce; color: #fff; }
.badge-purple { background: #805ad5; color: #fff; } .badge-orange { background: #dd6b20; color: #fff; }
.badge-teal { background: #319795; color: #fff; }
.badge.subtle { opacity: .75; }
.meta { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; font-size: .875rem; font-weight: 500; }
.actions { display: flex; gap: .5rem; justify-content: flex-end; border-top: 1px solid #e2e8f0; padding-top: .75rem; }
.button { display: inline-block; border: 0; border-radius: 6px; padding: .45rem 1rem; background: #3182ce; color: #fff; text-decoration: none; font-size: .875rem; cursor: pointer; }
.button.outline { background: transparent; color: #3182ce; border: 1px solid #3182ce; }
.button.wide { width: 100%; padding: .75rem; font-size: 1rem; margin-top: 1rem; }
.button[disabled] { background: #a0aec0; cursor: not-allowed; }
.field { margin-bottom: 1.1rem; } .field label { display: block; font-weight: 600; margin-bottom: .35rem; }
.field input, .field textarea { width: 100%; box-sizing: border-box; padding: .5rem; border: 1px solid #cbd5e0; border-radius: 6px; font: inherit; }
.field.invalid input, .field.invalid textarea { border-color: #e53e3e; }
.field-error { color: #e53e3e; font-size: .85rem; margin: .3rem 0 0; }
.helper { color: #718096; font-size: .85rem; margin: .3rem 0 0; }
.required { color: #e53e3e; }
.notification { border-radius: 6px; padding: .75rem 1rem; margin-bottom: 1.5rem; }
.notification.success { background: #c6f6d5; } .notification.error { background: #fed7d7; }
.notification p { margin: .25rem 0 0; }
.error-state { text-align: center; }
"#;

/// Wrap a page body in the shared document shell
pub fn page(title: &str, notification: Option<&Notification>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{notification}{body}
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
        notification = notification.map(render_notification).unwrap_or_default(),
        body = body,
    )
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        r#"<div class="container narrow"><div class="notification {status}" role="status"><strong>{title}</strong><p>{description}</p></div></div>
"#,
        status = notification.status.as_str(),
        title = escape(&notification.title),
        description = escape(&notification.description),
    )
}

/// Single-line input with its label and inline error
pub struct InputField<'a> {
    pub name: &'a str,
    pub label: &'a str,
    pub input_type: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
    pub extra_attributes: &'a str,
    pub helper: Option<&'a str>,
}

impl InputField<'_> {
    pub fn render(&self, errors: &FieldErrors) -> String {
        let control = format!(
            r#"<input id="{name}" name="{name}" type="{input_type}" value="{value}" placeholder="{placeholder}"{required}{extra}>"#,
            name = self.name,
            input_type = self.input_type,
            value = escape(self.value),
            placeholder = escape(self.placeholder),
            required = if self.required { " required" } else { "" },
            extra = self.extra_attributes,
        );
        field(self.name, self.label, self.required, &control, self.helper, errors)
    }
}

/// Labelled form control with optional helper text and inline error
pub fn field(
    name: &str,
    label: &str,
    required: bool,
    control: &str,
    helper: Option<&str>,
    errors: &FieldErrors,
) -> String {
    let error = errors.get(name);
    format!(
        r#"<div class="field{invalid}">
<label for="{name}">{label}{marker}</label>
{control}
{helper}{error}</div>
"#,
        invalid = if error.is_some() { " invalid" } else { "" },
        name = name,
        label = escape(label),
        marker = if required { r#" <span class="required">*</span>"# } else { "" },
        control = control,
        helper = helper
            .map(|text| format!(r#"<p class="helper">{}</p>"#, escape(text)))
            .unwrap_or_default(),
        error = error
            .map(|message| format!(r#"<p class="field-error">{}</p>"#, escape(message)))
            .unwrap_or_default(),
    )
}
