//! # /uploadAudio エンドポイント
//!
//! ## 処理フロー
//! 1. Content-Typeの検証（audio/wav以外は拒否）
//! 2. ボディをサイズ上限付きでバッファリング
//! 3. 保存先にペイロード全体を書き込み（既存内容は置換）
//!
//! ## 防御策
//! - Content-Length宣言値の事前チェック
//! - バッファリング中のサイズ上限（宣言のないチャンク転送にも適用）

mod handler;


pub use handler::handle_upload_audio;
