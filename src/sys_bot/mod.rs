// ----- Public Modules ----- //

pub mod bot_catalog;
pub mod bot_errors;
pub mod bot_generator;
pub mod bot_handlers;
pub mod bot_instructions;
pub mod bot_openai;
pub mod bot_reply;
pub mod bot_responder;

// ----- Exports ----- //

pub use bot_catalog::Catalog;
pub use bot_openai::OpenAiClient;
pub use bot_responder::Responder;
