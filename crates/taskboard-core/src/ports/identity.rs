//! IdentityGateway port - 認証プロバイダの抽象化
//!
//! # 学習ポイント
//! - コールバック型の購読を channel ベースの購読に置き換える
//! - Drop による購読解除（解放漏れをコンパイラが保証する）

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{AuthError, Principal};

/// ゲートウェイが push してくる認証状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// サインイン済み
    Authenticated(Principal),

    /// 未認証
    Anonymous,
}

/// AuthSubscription は認証状態イベントの購読
///
/// - 購読直後に現在の状態が 1 回流れる
/// - 以後、状態が変わるたびに流れる
/// - drop すると購読が解除される（明示的な unsubscribe は存在しない。
///   ビューの破棄と同時に必ずちょうど 1 回解放される）
#[derive(Debug)]
pub struct AuthSubscription {
    rx: mpsc::UnboundedReceiver<AuthState>,
}

impl AuthSubscription {
    pub fn new(rx: mpsc::UnboundedReceiver<AuthState>) -> Self {
        Self { rx }
    }

    /// 次のイベントを待つ（ゲートウェイ側が閉じたら None）
    pub async fn next(&mut self) -> Option<AuthState> {
        self.rx.recv().await
    }
}

/// IdentityGateway は認証プロバイダを操作
///
/// sign_in / sign_up は成功時に principal（メールアドレス）を返し、
/// 対応する認証状態の変化は subscribe() のストリームにも流れます。
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// 認証状態の購読を開始（現在の状態が即座に 1 回流れる）
    fn subscribe(&self) -> AuthSubscription;
}
