//! Errors - エラー型と分類
//!
//! # 分類
//! - **AuthError**: 認証まわり（資格情報の不一致・重複登録・バックエンド障害）
//! - **StoreError**: リモート読み書きの失敗（network / permission / not-found）
//! - **ValidationError**: ローカル検証（ストアに届く前に弾く）
//!
//! 伝播方針: ValidationError はストア呼び出し前に完結。Auth / Store の失敗は
//! リモート呼び出しに最も近い境界で捕捉し、ビューへは静的なステータス文字列
//! として届ける（unhandled でビュー層に漏らさない）。

use thiserror::Error;

/// Identity Gateway の失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already registered: {0}")]
    EmailAlreadyRegistered(String),

    #[error("auth backend failure: {0}")]
    Backend(String),
}

/// Document store の失敗（リモート呼び出し 1 回ぶん）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("document decode failed: {0}")]
    Decode(String),
}

/// ローカル検証エラー（ストア呼び出しを伴わない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title and description must be non-empty")]
    MissingFields,
}
