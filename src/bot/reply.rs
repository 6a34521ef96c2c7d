//! The three texts a user can get back from the command.

/// Discord rejects message content longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

pub const MISSING_INPUT_TEXT: &str = "Please provide Japanese text or an image.";
pub const FAILURE_TEXT: &str = "Failed to translate.";
pub const TRANSLATION_LABEL: &str = "**Translation:**";

/// Final content of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Neither text nor readable image was supplied.
    MissingInput,
    /// The translated text, without the label.
    Translation(String),
    /// A downstream call failed. Details only go to the log.
    Failure,
}

impl Reply {
    /// Renders the message sent to the user.
    pub fn text(&self) -> String {
        match self {
            Self::MissingInput => MISSING_INPUT_TEXT.to_string(),
            Self::Failure => FAILURE_TEXT.to_string(),
            Self::Translation(translated) => {
                truncate_message(&format!("{TRANSLATION_LABEL}\n{translated}"))
            }
        }
    }

    pub const fn is_translation(&self) -> bool {
        matches!(self, Self::Translation(_))
    }
}

/// Cuts `text` to [`MAX_MESSAGE_CHARS`] characters, ending with `…` when shortened.
pub fn truncate_message(text: &str) -> String {
    if text.chars().count() <= MAX_MESSAGE_CHARS {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(MAX_MESSAGE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_reply_has_label() {
        let reply = Reply::Translation("Hello".to_string());
        assert_eq!(reply.text(), "**Translation:**\nHello");
    }

    #[test]
    fn test_missing_input_text() {
        assert_eq!(
            Reply::MissingInput.text(),
            "Please provide Japanese text or an image."
        );
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(Reply::Failure.text(), "Failed to translate.");
    }

    #[test]
    fn test_long_translation_is_truncated() {
        let reply = Reply::Translation("a".repeat(5000));
        let text = reply.text();

        assert_eq!(text.chars().count(), MAX_MESSAGE_CHARS);
        assert!(text.starts_with("**Translation:**\n"));
        assert!(text.ends_with('…'));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "翻".repeat(MAX_MESSAGE_CHARS + 10);
        let truncated = truncate_message(&text);

        assert_eq!(truncated.chars().count(), MAX_MESSAGE_CHARS);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_truncate_at_exact_limit_is_untouched() {
        let text = "x".repeat(MAX_MESSAGE_CHARS);
        assert_eq!(truncate_message(&text), text);
    }
}
