//! DocumentStore port - ドキュメントデータベースの抽象化
//!
//! リモートのドキュメントコレクション（collection / id / JSON body）への
//! インターフェースです。すべて非同期・失敗しうる呼び出しで、失敗は
//! StoreError に分類されます。
//!
//! # 設計原則
//! - ドキュメント本体は `serde_json::Value`（スキーマレス）
//! - 型付けは上位の TaskRepository が担当
//! - 認可は enforce しない（owner スコープは呼び出し側の責務）
//! - キャッシュ・バッチ・複数ドキュメントのトランザクションは持たない

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::StoreError;

/// DocumentStore はリモートのドキュメントコレクションを操作
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// ドキュメントを追加し、ストアが採番した id を返す
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// `field == value` のドキュメントを `(id, body)` で列挙（ストア順）
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<(String, Value)>, StoreError>;

    /// 部分ドキュメントでトップレベルのフィールドを上書き
    ///
    /// id が存在しない場合は `StoreError::NotFound`
    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<(), StoreError>;

    /// ドキュメントを削除（ハードデリート、復元なし）
    ///
    /// id が存在しない場合は `StoreError::NotFound`
    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
