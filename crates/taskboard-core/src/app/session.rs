//! SessionController - 認証状態の監視と保護ビューの制御
//!
//! IdentityGateway の認証状態ストリームから現在の principal を導出します。
//! 未認証になったら保護ビューから退避（タスク状態を破棄してログイン画面へ
//! リダイレクト）し、認証されたらその principal のタスクを全件ロードします。
//!
//! # 購読のライフサイクル
//! - AuthSubscription はビューの生存期間に合わせて保持し、解除は drop に任せる
//! - 破棄済みのビューに紐づいた購読が残って古い画面を操作しないこと

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::SessionState;
use crate::ports::{AuthState, AuthSubscription, IdentityGateway, Navigator, Route};

use super::board::{BoardController, StatusMessage};

/// SessionController は認証イベントを状態遷移として適用
pub struct SessionController {
    gateway: Arc<dyn IdentityGateway>,
    navigator: Arc<dyn Navigator>,
    state: SessionState,
}

impl SessionController {
    pub fn new(gateway: Arc<dyn IdentityGateway>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            gateway,
            navigator,
            state: SessionState::Unknown,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 認証状態の購読を開始（現在の状態が即座に 1 回流れる）
    pub fn subscribe(&self) -> AuthSubscription {
        self.gateway.subscribe()
    }

    /// 認証イベントを 1 件適用
    ///
    /// - Anonymous: タスク状態を破棄してからログイン画面へ
    ///   （タスクのロードは一切試みない）
    /// - Authenticated: principal を記録してボードを全件ロード
    pub async fn apply(&mut self, event: AuthState, board: &mut BoardController) {
        match event {
            AuthState::Anonymous => {
                debug!("session -> unauthenticated");
                self.state = SessionState::Unauthenticated;
                board.clear();
                self.navigator.navigate(Route::Login);
            }
            AuthState::Authenticated(principal) => {
                debug!(%principal, "session -> authenticated");
                self.state = SessionState::Authenticated(principal.clone());
                board.load(&principal).await;
            }
        }
    }

    /// サインアウト
    ///
    /// 成功時の Unauthenticated への遷移は購読経由で届く。
    /// 失敗はボードのステータスメッセージとして出す。
    pub async fn sign_out(&mut self, board: &mut BoardController) {
        if let Err(error) = self.gateway.sign_out().await {
            warn!(%error, "sign-out failed");
            board.set_status(StatusMessage::SignOutFailed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthError, NewTask, Principal, Priority};
    use crate::impls::{InMemoryDocumentStore, InMemoryIdentityGateway};
    use crate::ports::{RecordingNavigator, SystemClock, UlidGenerator};
    use crate::repository::TaskRepository;
    use async_trait::async_trait;

    struct Harness {
        store: Arc<InMemoryDocumentStore>,
        gateway: Arc<InMemoryIdentityGateway>,
        navigator: Arc<RecordingNavigator>,
        board: BoardController,
        session: SessionController,
    }

    fn harness() -> Harness {
        let store = Arc::new(InMemoryDocumentStore::new(UlidGenerator::new(SystemClock)));
        let gateway = Arc::new(InMemoryIdentityGateway::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let board = BoardController::new(TaskRepository::new(store.clone()));
        let session = SessionController::new(gateway.clone(), navigator.clone());
        Harness {
            store,
            gateway,
            navigator,
            board,
            session,
        }
    }

    #[tokio::test]
    async fn unauthenticated_viewer_is_redirected_before_any_task_load() {
        let mut h = harness();

        let mut subscription = h.session.subscribe();
        let event = subscription.next().await.unwrap();
        h.session.apply(event, &mut h.board).await;

        assert_eq!(*h.session.state(), SessionState::Unauthenticated);
        assert_eq!(h.navigator.visited(), vec![Route::Login]);
        // リダイレクトまでにストアへの問い合わせは 1 回も起きない
        assert_eq!(h.store.counts().queries, 0);
    }

    #[tokio::test]
    async fn authentication_triggers_a_full_board_load() {
        let mut h = harness();
        let principal = Principal::new("a@x.com");
        let repository = TaskRepository::new(h.store.clone());
        repository
            .create(NewTask::new("Buy milk", "2%", Priority::Low, principal.clone()))
            .await
            .unwrap();

        h.session
            .apply(AuthState::Authenticated(principal.clone()), &mut h.board)
            .await;

        assert_eq!(*h.session.state(), SessionState::Authenticated(principal));
        assert_eq!(h.board.tasks().len(), 1);
        assert!(h.navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn signing_out_clears_the_board_and_redirects() {
        let mut h = harness();
        h.gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        let mut subscription = h.session.subscribe();
        let event = subscription.next().await.unwrap(); // 現在状態 = Authenticated
        h.session.apply(event, &mut h.board).await;
        assert!(h.session.state().is_authenticated());

        h.session.sign_out(&mut h.board).await;
        let event = subscription.next().await.unwrap();
        h.session.apply(event, &mut h.board).await;

        assert_eq!(*h.session.state(), SessionState::Unauthenticated);
        assert!(h.board.owner().is_none());
        assert!(h.board.tasks().is_empty());
        assert_eq!(h.navigator.visited(), vec![Route::Login]);
    }

    struct BrokenGateway;

    #[async_trait]
    impl IdentityGateway for BrokenGateway {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Principal, AuthError> {
            Err(AuthError::Backend("down".to_string()))
        }

        async fn sign_up(&self, _email: &str, _password: &str) -> Result<Principal, AuthError> {
            Err(AuthError::Backend("down".to_string()))
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Err(AuthError::Backend("down".to_string()))
        }

        fn subscribe(&self) -> AuthSubscription {
            let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
            AuthSubscription::new(rx)
        }
    }

    #[tokio::test]
    async fn failed_sign_out_surfaces_a_status_message() {
        let store = Arc::new(InMemoryDocumentStore::new(UlidGenerator::new(SystemClock)));
        let navigator = Arc::new(RecordingNavigator::new());
        let mut board = BoardController::new(TaskRepository::new(store));
        let mut session = SessionController::new(Arc::new(BrokenGateway), navigator.clone());

        session.sign_out(&mut board).await;

        assert_eq!(board.status(), Some(StatusMessage::SignOutFailed));
        // 遷移は購読経由でのみ起きるので、失敗時は何も起きない
        assert!(navigator.visited().is_empty());
    }
}
