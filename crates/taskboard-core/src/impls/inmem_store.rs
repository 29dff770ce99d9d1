//! InMemoryDocumentStore - 開発・テスト用のドキュメントストア
//!
//! # 学習ポイント
//! - コレクションを挿入順の Vec<(id, body)> で保持（クエリ結果はストア順）
//! - 失敗注入（fail_next_ops）でエラーパスをテスト
//! - 操作カウンタで「ストア呼び出しが起きていないこと」を検証可能に

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::StoreError;
use crate::ports::{DocumentStore, IdGenerator};

/// 操作カウンタのスナップショット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub inserts: usize,
    pub queries: usize,
    pub updates: usize,
    pub removes: usize,
}

/// InMemoryDocumentStore は開発用のドキュメントストア
///
/// # 実装詳細
/// - HashMap<String, Vec<(String, Value)>> で collection ごとに挿入順を保持
/// - id は注入された IdGenerator が採番（ストア側採番のモデル化）
/// - update_fields はトップレベルのキーのみマージ
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<(String, Value)>>>,
    ids: Box<dyn IdGenerator>,

    /// 残り何回の操作を失敗させるか
    fail_next: AtomicU32,

    inserts: AtomicUsize,
    queries: AtomicUsize,
    updates: AtomicUsize,
    removes: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            ids: Box::new(ids),
            fail_next: AtomicU32::new(0),
            inserts: AtomicUsize::new(0),
            queries: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
        }
    }

    /// 次の n 回の操作を失敗させる
    pub fn fail_next_ops(&self, n: u32) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            inserts: self.inserts.load(Ordering::SeqCst),
            queries: self.queries.load(Ordering::SeqCst),
            updates: self.updates.load(Ordering::SeqCst),
            removes: self.removes.load(Ordering::SeqCst),
        }
    }

    fn take_injected_failure(&self) -> Result<(), StoreError> {
        let armed = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if armed {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.take_injected_failure()?;

        let id = self.ids.generate_document_id();
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), document));
        Ok(id)
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<(String, Value)>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.take_injected_failure()?;

        let collections = self.collections.lock().await;
        let rows = collections
            .get(collection)
            .map(|rows| {
                rows.iter()
                    .filter(|(_, body)| body.get(field) == Some(&value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.take_injected_failure()?;

        let Some(fields) = fields.as_object().cloned() else {
            return Err(StoreError::Decode(
                "partial document must be a JSON object".to_string(),
            ));
        };

        let mut collections = self.collections.lock().await;
        let row = collections
            .get_mut(collection)
            .and_then(|rows| rows.iter_mut().find(|(row_id, _)| row_id == id));
        let Some((_, body)) = row else {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };

        let Some(body) = body.as_object_mut() else {
            return Err(StoreError::Decode(
                "stored document is not a JSON object".to_string(),
            ));
        };
        for (key, value) in fields {
            body.insert(key, value);
        }
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.take_injected_failure()?;

        let mut collections = self.collections.lock().await;
        let rows = collections.get_mut(collection);
        let position = rows
            .as_ref()
            .and_then(|rows| rows.iter().position(|(row_id, _)| row_id == id));
        match (rows, position) {
            (Some(rows), Some(position)) => {
                rows.remove(position);
                Ok(())
            }
            _ => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }
}
