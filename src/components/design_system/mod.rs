//! Design System Components
//!
//! Small, reusable building blocks shared by the page sections.

mod button;
mod card;
mod input;
mod loading;
mod toast;

pub use button::{Button, ButtonVariant};
pub use card::Panel;
pub use input::{Input, TextArea};
pub use loading::LoadingSpinner;
pub use toast::{Toast, ToastContainer};
