pub mod auth;
pub mod core;
pub mod favorites;
pub mod tts;
pub mod voices;


pub use auth::*;
pub use self::core::ApiClient;
pub use favorites::*;
pub use tts::*;
pub use voices::*;
