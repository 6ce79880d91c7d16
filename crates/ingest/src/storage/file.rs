//! # ローカルファイル保存先
//!
//! 受信したペイロードを単一の固定ファイルに書き込む。
//! 各アップロードでファイル全体を置き換える。

use std::path::PathBuf;

use super::AudioStore;
use crate::error::IngestError;

/// ローカルファイルに書き込むAudioStore実装。
///
/// 書き込みは作成（truncate）→書き込み→クローズのスコープ付き操作であり、
/// エラー経路でもハンドルは解放される。書き込みが途中で失敗した場合、
/// ファイルは不定（切り詰められた可能性のある）状態で残る。
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// 新しいFileStoreを作成する。
    ///
    /// # 引数
    /// - `path`: 保存先ファイルパス
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl AudioStore for FileStore {
    async fn store(&self, payload: &[u8]) -> Result<(), IngestError> {
        tokio::fs::write(&self.path, payload).await.map_err(|e| {
            IngestError::Internal(format!(
                "保存先への書き込みに失敗 ({}): {e}",
                self.path.display()
            ))
        })?;

        tracing::info!(
            path = %self.path.display(),
            size_bytes = payload.len(),
            "保存先ファイルを更新しました"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("audio-ingest-store-{}.wav", uuid::Uuid::new_v4()))
    }

    /// 書き込んだ内容がそのまま読み戻せることを確認
    #[tokio::test]
    async fn test_store_roundtrip() {
        let path = temp_path();
        let store = FileStore::new(path.clone());

        store.store(b"hello wav").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello wav".to_vec());

        let _ = std::fs::remove_file(&path);
    }

    /// 2回目の書き込みで内容が完全に置き換わることを確認（追記されない）
    #[tokio::test]
    async fn test_store_overwrites() {
        let path = temp_path();
        let store = FileStore::new(path.clone());

        store.store(&[0xAA; 64]).await.unwrap();
        store.store(b"short").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short".to_vec());

        let _ = std::fs::remove_file(&path);
    }

    /// 書き込み不能なパスはInternalエラーになることを確認
    #[tokio::test]
    async fn test_store_write_failure() {
        let path = std::env::temp_dir().join(format!(
            "audio-ingest-missing-{}/audio.wav",
            uuid::Uuid::new_v4()
        ));
        let store = FileStore::new(path);

        let result = store.store(b"data").await;
        assert!(matches!(result.unwrap_err(), IngestError::Internal(_)));
    }
}
