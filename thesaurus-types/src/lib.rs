pub mod errors;
pub mod round;
pub mod word;

// Re-export all types
pub use errors::*;
pub use round::*;
pub use word::*;

pub type SessionId = uuid::Uuid;
