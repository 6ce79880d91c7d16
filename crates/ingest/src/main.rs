//! # 音声アップロードサーバー
//!
//! 録音クライアントから送信されたWAV音声ペイロードを受信し、
//! ローカルファイルに保存する最小構成のHTTPサーバー。
//!
//! ## APIエンドポイント
//! - `POST /uploadAudio` — 音声ペイロードの受信と保存

mod config;
mod endpoints;
mod error;
mod storage;

use std::sync::Arc;

use config::{AppState, IngestConfig};
use storage::FileStore;

/// axumルーターを構築する。
pub fn app(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route(
            "/uploadAudio",
            axum::routing::post(endpoints::handle_upload_audio),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = IngestConfig::from_env()?;
    tracing::info!(
        destination = %config.destination_path.display(),
        max_body_bytes = config.max_body_bytes,
        "設定を読み込みました"
    );

    let state = Arc::new(AppState {
        store: Box::new(FileStore::new(config.destination_path.clone())),
        max_body_bytes: config.max_body_bytes,
    });

    let app = app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("音声アップロードサーバーを {} で起動します", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
