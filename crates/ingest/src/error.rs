//! # アップロードサーバー エラー型
//!
//! 全エンドポイントで共通のエラー型。
//! レスポンスへの変換は境界で一度だけ行う。

use axum::http::StatusCode;

/// アップロード処理のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// ペイロードサイズ超過
    #[error("ペイロードサイズが上限を超えています: {0}")]
    PayloadTooLarge(String),
    /// サポートされないメディアタイプ
    #[error("サポートされないメディアタイプ: {0}")]
    UnsupportedMediaType(String),
    /// 内部エラー（ファイル書き込み失敗等）
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for IngestError {
    fn into_response(self) -> axum::response::Response {
        // 詳細はサーバー側ログにのみ残し、ワイヤには固定メッセージを返す
        match &self {
            IngestError::Internal(_) => tracing::error!("アップロード処理に失敗: {self}"),
            _ => tracing::warn!("アップロードリクエストを拒否: {self}"),
        }

        let (status, message) = match &self {
            IngestError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "Archivo demasiado grande")
            }
            IngestError::UnsupportedMediaType(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Tipo de contenido no soportado",
            ),
            IngestError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocurrió un error en el servidor",
            ),
        };
        (status, message).into_response()
    }
}
