//! Client for OpenAI compatible chat completion APIs.
mod chat;
mod core;

pub use chat::complete;
pub use self::core::{CompletionError, CompletionParams, Message, completion};
