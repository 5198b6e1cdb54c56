use crate::models::{Conversation, ExtractedContent};

/// Persona and goal sent as the system turn of every request.
pub const SYSTEM_PROMPT: &str = "You are a hardworking student trying to apply for jobs. \
    Look at the webpage for the company's website and write a strong motivation letter \
    focusing on specific points mentioned in the page that you will be particularly good at.";

/// User turn: page title, the letter-writing task, then the page text verbatim.
pub fn build_user_prompt(content: &ExtractedContent) -> String {
    format!(
        "You are looking at a website titled '{}'.\n\
         The contents of this website are as follows. \
         Please write a motivation letter to apply for a job at this company:\n\n{}",
        content.title, content.body_text
    )
}

/// Pair the user prompt with [`SYSTEM_PROMPT`].
pub fn build_conversation(content: &ExtractedContent) -> Conversation {
    build_conversation_with(SYSTEM_PROMPT, content)
}

/// Pair the user prompt with a caller-supplied system instruction.
pub fn build_conversation_with(system_prompt: &str, content: &ExtractedContent) -> Conversation {
    Conversation::new(system_prompt, build_user_prompt(content))
}
