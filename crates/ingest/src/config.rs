//! # 設定・共有状態
//!
//! 環境変数からの設定読み込みとサーバーの共有状態の定義。

use std::path::PathBuf;

use crate::storage::AudioStore;

/// 既定のリッスンポート。
pub const DEFAULT_PORT: u16 = 8888;

/// 既定の保存先ファイルパス（プロセスの作業ディレクトリ基準）。
pub const DEFAULT_DESTINATION_PATH: &str = "audio_received.wav";

/// 既定のペイロードサイズ上限（50MB）。
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// サーバー設定。
/// 全項目が環境変数で上書き可能で、未設定なら既定値を使う。
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// 保存先ファイルパス
    pub destination_path: PathBuf,
    /// リッスンポート
    pub port: u16,
    /// ペイロードサイズ上限（バイト）
    pub max_body_bytes: usize,
}

impl IngestConfig {
    /// 環境変数から構築する。
    ///
    /// - `AUDIO_DESTINATION_PATH`: 保存先ファイルパス
    /// - `AUDIO_PORT`: リッスンポート
    /// - `AUDIO_MAX_BODY_BYTES`: ペイロードサイズ上限（バイト）
    ///
    /// 値が設定されているのにパースできない場合はエラーを返す。
    pub fn from_env() -> anyhow::Result<Self> {
        let destination_path = std::env::var("AUDIO_DESTINATION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DESTINATION_PATH));

        let port = match std::env::var("AUDIO_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                anyhow::anyhow!("AUDIO_PORTはポート番号である必要があります: {raw}")
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let max_body_bytes = match std::env::var("AUDIO_MAX_BODY_BYTES") {
            Ok(raw) => raw.parse::<usize>().map_err(|_| {
                anyhow::anyhow!("AUDIO_MAX_BODY_BYTESはバイト数である必要があります: {raw}")
            })?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            destination_path,
            port,
            max_body_bytes,
        })
    }
}

/// サーバーの共有状態。
pub struct AppState {
    /// 受信した音声の保存先（トレイトで抽象化）
    pub store: Box<dyn AudioStore>,
    /// 受理するボディの最大サイズ（バイト）
    pub max_body_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 環境変数未設定時は既定値、設定時は上書きされることを確認。
    /// 環境変数はプロセス全体で共有されるため1テストにまとめている。
    #[test]
    fn test_from_env_defaults_and_overrides() {
        std::env::remove_var("AUDIO_DESTINATION_PATH");
        std::env::remove_var("AUDIO_PORT");
        std::env::remove_var("AUDIO_MAX_BODY_BYTES");

        let config = IngestConfig::from_env().unwrap();
        assert_eq!(
            config.destination_path,
            PathBuf::from(DEFAULT_DESTINATION_PATH)
        );
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_body_bytes, 52_428_800);

        std::env::set_var("AUDIO_DESTINATION_PATH", "/tmp/out.wav");
        std::env::set_var("AUDIO_PORT", "9000");
        std::env::set_var("AUDIO_MAX_BODY_BYTES", "1024");

        let config = IngestConfig::from_env().unwrap();
        assert_eq!(config.destination_path, PathBuf::from("/tmp/out.wav"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_body_bytes, 1024);

        std::env::set_var("AUDIO_PORT", "not-a-port");
        assert!(IngestConfig::from_env().is_err());

        std::env::remove_var("AUDIO_DESTINATION_PATH");
        std::env::remove_var("AUDIO_PORT");
        std::env::remove_var("AUDIO_MAX_BODY_BYTES");
    }
}
