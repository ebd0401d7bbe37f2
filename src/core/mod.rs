pub mod commands;
pub mod context;
pub mod env;
pub mod router;
pub mod tokenizer;
