use crate::chat::Role;
use crate::openai::{CompletionError, CompletionParams, Message, completion};

/// Runs the next turn in chat by passing the transcript to the LLM
/// and returning its reply as an assistant message. Ids are stripped
/// before sending. Nothing is appended or saved here.
pub async fn complete(
    history: &[crate::chat::Message],
    params: &CompletionParams<'_>,
) -> Result<Message, CompletionError> {
    let messages: Vec<Message> = history.iter().map(Message::from).collect();
    let resp = completion(&messages, params).await?;

    match resp["choices"][0]["message"]["content"].as_str() {
        Some(content) => Ok(Message::new(Role::Assistant, content)),
        None => Err(CompletionError::Malformed(format!(
            "No message received. Resp: {}",
            resp
        ))),
    }
}
