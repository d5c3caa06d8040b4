pub mod auth_panel;
pub mod design_system;
pub mod developer_guide;
pub mod hero;
pub mod now_playing;
pub mod snippet_editor;
pub mod voice_card;
pub mod voice_catalog;
