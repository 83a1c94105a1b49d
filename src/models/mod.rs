pub mod chat;
pub mod language;
pub mod messages;
pub mod prompt;
