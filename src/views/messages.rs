use crate::models::Message;

use super::{empty_notice, escape_html, format_date_time, layout, text_or_empty};

/// Unread messages link to `/messages/{id}/read`, addressing the row by id.
pub fn render_messages(patient_name: &str, messages: &[Message]) -> String {
    let body = if messages.is_empty() {
        empty_notice("messages")
    } else {
        messages
            .iter()
            .map(|m| {
                let (class, action) = if m.is_read {
                    ("message", String::new())
                } else {
                    (
                        "message unread",
                        format!(
                            r#" <span class="badge unread">Unread</span> <a href="/messages/{}/read">Mark as read</a>"#,
                            m.id
                        ),
                    )
                };
                format!(
                    r#"<article class="{class}" id="message-{id}">
<h3>{subject}</h3>
<p class="muted">From {sender} &middot; {date}{action}</p>
<p>{text}</p>
</article>
"#,
                    id = m.id,
                    subject = escape_html(&m.subject),
                    sender = escape_html(&m.sender),
                    date = format_date_time(&m.sent_date),
                    text = text_or_empty(m.message_text.as_deref()),
                )
            })
            .collect()
    };

    layout("Messages", "/messages", patient_name, &body)
}
