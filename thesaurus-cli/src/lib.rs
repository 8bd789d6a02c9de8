pub mod config;
pub mod console;
pub mod session_store;
pub mod words_api;
