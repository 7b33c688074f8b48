//! Alert payload in the Discord webhook "embeds" format.

use serde::{Deserialize, Serialize};

use crate::contact::ContactSubmission;

pub const ALERT_TITLE: &str = "🚀 New Portfolio Lead!";
/// Burgundy/rose.
pub const ALERT_COLOR: u32 = 15548997;
pub const ALERT_FOOTER: &str = "System Health: Optimal | Source: Home Server Webhook";

/// Maximum characters the alert channel accepts in one field value.
pub const FIELD_VALUE_LIMIT: usize = 1024;

const EMPTY_MESSAGE_PLACEHOLDER: &str = "(no message)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
}

impl EmbedField {
    fn block(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: clamp_field_value(value),
            inline: false,
        }
    }
}

impl AlertPayload {
    /// Builds the single-embed alert for a contact submission.
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        let from = format!("{} ({})", submission.name(), submission.email());
        let message = if submission.message().trim().is_empty() {
            EMPTY_MESSAGE_PLACEHOLDER
        } else {
            submission.message()
        };

        Self {
            embeds: vec![Embed {
                title: ALERT_TITLE.to_string(),
                color: ALERT_COLOR,
                fields: vec![
                    EmbedField::block("From", &from),
                    EmbedField::block("Message", message),
                ],
                footer: EmbedFooter {
                    text: ALERT_FOOTER.to_string(),
                },
            }],
        }
    }
}

/// Truncates to `FIELD_VALUE_LIMIT` characters, ending in an ellipsis when cut.
fn clamp_field_value(value: &str) -> String {
    if value.chars().count() <= FIELD_VALUE_LIMIT {
        return value.to_string();
    }
    let mut clamped: String = value.chars().take(FIELD_VALUE_LIMIT - 1).collect();
    clamped.push('…');
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use serde_json::json;

    fn submission(message: &str) -> ContactSubmission {
        ContactSubmission::try_from(ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: message.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = AlertPayload::from_submission(&submission("Let's talk logistics."));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "embeds": [{
                    "title": "🚀 New Portfolio Lead!",
                    "color": 15548997,
                    "fields": [
                        {"name": "From", "value": "Jane Doe (jane@example.com)", "inline": false},
                        {"name": "Message", "value": "Let's talk logistics.", "inline": false}
                    ],
                    "footer": {"text": "System Health: Optimal | Source: Home Server Webhook"}
                }]
            })
        );
    }

    #[test]
    fn test_empty_message_gets_placeholder() {
        let payload = AlertPayload::from_submission(&submission("  "));
        assert_eq!(payload.embeds[0].fields[1].value, "(no message)");
    }

    #[test]
    fn test_long_message_is_truncated() {
        let long = "é".repeat(FIELD_VALUE_LIMIT + 50);
        let payload = AlertPayload::from_submission(&submission(&long));
        let value = &payload.embeds[0].fields[1].value;

        assert_eq!(value.chars().count(), FIELD_VALUE_LIMIT);
        assert!(value.ends_with('…'));
    }

    #[test]
    fn test_message_at_limit_is_untouched() {
        let exact = "a".repeat(FIELD_VALUE_LIMIT);
        let payload = AlertPayload::from_submission(&submission(&exact));
        assert_eq!(payload.embeds[0].fields[1].value, exact);
    }
}
