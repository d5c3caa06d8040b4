pub mod favorites;
pub mod notification_service;
pub mod playback;
pub mod session;
pub mod storage;
