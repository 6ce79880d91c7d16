//! # APIエンドポイント

pub mod upload_audio;

pub use upload_audio::handle_upload_audio;
