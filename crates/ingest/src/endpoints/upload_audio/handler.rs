//! /uploadAudio ハンドラ実装

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap};

use crate::config::AppState;
use crate::error::IngestError;

/// 受理する音声のメディアタイプ。
pub(crate) const AUDIO_WAV: &str = "audio/wav";

/// アップロード成功時のレスポンスボディ。
/// 録音クライアントのファームウェアがこの文字列を期待している。
pub(crate) const UPLOAD_OK_MESSAGE: &str = "Audio recibido con éxito";

/// POST /uploadAudio エンドポイントハンドラ。
///
/// 音声ペイロードをサイズ上限付きでバッファリングし、保存先に書き込む。
/// 保存先の既存内容は完全に置き換えられる。
pub async fn handle_upload_audio(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Body,
) -> Result<&'static str, IngestError> {
    // Content-Typeの検証（パラメータ部は無視、大文字小文字は区別しない）
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !is_wav_media_type(content_type) {
        return Err(IngestError::UnsupportedMediaType(format!(
            "Content-Typeは{AUDIO_WAV}である必要があります: \"{content_type}\""
        )));
    }

    // リクエストメタデータの記録。ペイロード本体はログに出さない。
    let declared_len = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    tracing::info!(
        content_type = %content_type,
        content_length = ?declared_len,
        "アップロードリクエストを受信"
    );

    // 宣言サイズが上限を超えていたらバッファリング前に拒否
    if let Some(declared) = declared_len {
        if declared > state.max_body_bytes as u64 {
            return Err(IngestError::PayloadTooLarge(format!(
                "宣言サイズが上限を超えています: {declared} bytes (上限: {} bytes)",
                state.max_body_bytes
            )));
        }
    }

    // ボディ全体をサイズ上限付きでバッファリング。
    // 宣言のないチャンク転送にもここで上限が効く。
    let payload = axum::body::to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| classify_read_error(e, state.max_body_bytes))?;

    state.store.store(&payload).await?;

    tracing::info!(size_bytes = payload.len(), "音声ペイロードを保存しました");

    Ok(UPLOAD_OK_MESSAGE)
}

/// メディアタイプのessence部分がaudio/wavかどうかを判定する。
fn is_wav_media_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|essence| essence.eq_ignore_ascii_case(AUDIO_WAV))
}

/// ボディ読み取りエラーを分類する。
/// サイズ上限超過はエラーチェーン内のLengthLimitErrorとして現れる。
fn classify_read_error(err: axum::Error, limit: usize) -> IngestError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
    while let Some(e) = source {
        if e.is::<http_body_util::LengthLimitError>() {
            return IngestError::PayloadTooLarge(format!(
                "ボディサイズが上限を超えています (上限: {limit} bytes)"
            ));
        }
        source = e.source();
    }
    IngestError::Internal(format!("リクエストボディの読み取りに失敗: {err}"))
}
