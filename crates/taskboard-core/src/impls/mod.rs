//! Implementations - 開発・テスト用の in-memory 実装
//!
//! 本番ではマネージドな認証プロバイダ / ドキュメントデータベースの
//! クライアントを ports に差しますが、開発とテストはここの実装で完結します。

pub mod inmem_identity;
pub mod inmem_store;

pub use self::inmem_identity::InMemoryIdentityGateway;
pub use self::inmem_store::{InMemoryDocumentStore, StoreCounts};
