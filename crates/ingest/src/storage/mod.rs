//! # 音声ペイロードの保存先
//!
//! 保存先の抽象インターフェース。
//! ローカルファイル実装は `file` サブモジュールを参照。

pub mod file;

pub use file::FileStore;

use crate::error::IngestError;

/// 音声ペイロードの保存先を抽象化するトレイト。
///
/// 運用者はローカルファイルやその他のバックエンドを実装として選択できる。
/// 保存は常に全置換であり、追記やバージョニングは行わない。
#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    /// ペイロードを保存する。既存の内容は完全に置き換えられる。
    async fn store(&self, payload: &[u8]) -> Result<(), IngestError>;
}
