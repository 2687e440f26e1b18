//! One-shot subcommands, each a thin wrapper over one client call

pub mod ask;
pub mod chat;
pub mod docs;
pub mod faqs;
pub mod routes;

pub use ask::ask_command;
pub use chat::chat_command;
pub use docs::{docs_command, remove_command, upload_command};
pub use faqs::faqs_command;
pub use routes::routes_command;
