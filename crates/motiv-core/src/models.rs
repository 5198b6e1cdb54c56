use std::fmt;

use serde::Serialize;

/// Title used when a page has no `<title>` element or it is empty.
pub const NO_TITLE_FALLBACK: &str = "No title found";

/// Raw HTML downloaded from a single URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub raw_html: String,
}

/// Visible text pulled out of a [`FetchedPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Trimmed `<title>` text, or [`NO_TITLE_FALLBACK`].
    pub title: String,
    /// Newline-separated text segments from `<body>`, scripts and media removed.
    pub body_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged turn of a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The system instruction followed by the user prompt.
///
/// Only constructible through [`Conversation::new`], so it always holds
/// exactly those two turns in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: [ChatMessage; 2],
}

impl Conversation {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: system.into(),
                },
                ChatMessage {
                    role: Role::User,
                    content: user.into(),
                },
            ],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn system(&self) -> &str {
        &self.messages[0].content
    }

    pub fn user(&self) -> &str {
        &self.messages[1].content
    }
}

/// Letter text as returned by the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLetter(pub String);

impl GeneratedLetter {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
