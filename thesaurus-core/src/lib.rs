pub mod cleanup;
pub mod game_session;
pub mod round_controller;
pub mod round_events;
pub mod spawner;
pub mod word_cache;
pub mod word_source;
pub mod word_validation;

// Re-export main components
pub use cleanup::*;
pub use game_session::*;
pub use round_controller::*;
pub use round_events::*;
pub use spawner::*;
pub use word_cache::*;
pub use word_source::*;
pub use word_validation::*;
