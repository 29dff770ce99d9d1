//! taskboard-core
//!
//! Core building blocks for the taskboard client.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, principal, priority, task, session, errors）
//! - **ports**: 抽象化レイヤー（DocumentStore, IdentityGateway, Navigator, Clock, IdGenerator）
//! - **repository**: TaskRepository（DocumentStore 上の型付きファサード）
//! - **app**: アプリケーションロジック（SessionController, BoardController, AuthController）
//! - **impls**: 実装（InMemoryDocumentStore, InMemoryIdentityGateway など開発用）
//!
//! # データフロー
//! IdentityGateway の認証状態ストリーム → SessionController が principal を導出
//! → BoardController が TaskRepository 経由でタスクを全件ロード
//! → ユーザー操作（create / update / delete）→ 成功後に全件リロード

pub mod domain;
pub mod ports;
pub mod repository;
pub mod app;
pub mod impls;
