//! InMemoryIdentityGateway - 開発・テスト用の認証プロバイダ
//!
//! # 学習ポイント
//! - 購読者への fan-out（unbounded channel）と購読直後の現在状態通知
//! - 送信失敗（受信側 drop）をもって購読者を剪定する

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{AuthError, Principal};
use crate::ports::{AuthState, AuthSubscription, IdentityGateway};

/// InMemoryIdentityGateway はメール + パスワード認証をメモリ内で模倣
///
/// # 挙動
/// - sign_up は登録と同時にサインインする（マネージド認証の挙動に合わせる）
/// - 状態が変わるたびに全購読者へ AuthState を配る
/// - drop された購読は次の配信時に取り除かれる
pub struct InMemoryIdentityGateway {
    users: Mutex<HashMap<String, String>>,
    current: Mutex<AuthState>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<AuthState>>>,
}

impl InMemoryIdentityGateway {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            current: Mutex::new(AuthState::Anonymous),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn set_state(&self, state: AuthState) {
        *self.current.lock().unwrap() = state.clone();
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(state.clone()).is_ok());
    }
}

impl Default for InMemoryIdentityGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityGateway for InMemoryIdentityGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        {
            let users = self.users.lock().unwrap();
            match users.get(email) {
                Some(stored) if stored == password => {}
                _ => return Err(AuthError::InvalidCredentials),
            }
        }
        let principal = Principal::new(email);
        self.set_state(AuthState::Authenticated(principal.clone()));
        Ok(principal)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(AuthError::EmailAlreadyRegistered(email.to_string()));
            }
            users.insert(email.to_string(), password.to_string());
        }
        let principal = Principal::new(email);
        self.set_state(AuthState::Authenticated(principal.clone()));
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.set_state(AuthState::Anonymous);
        Ok(())
    }

    fn subscribe(&self) -> AuthSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        // 購読直後に現在の状態を 1 回流す
        let _ = tx.send(self.current.lock().unwrap().clone());
        self.subscribers.lock().unwrap().push(tx);
        AuthSubscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribe_emits_the_current_state_immediately() {
        let gateway = InMemoryIdentityGateway::new();

        let mut subscription = gateway.subscribe();
        assert_eq!(subscription.next().await, Some(AuthState::Anonymous));
    }

    #[tokio::test]
    async fn sign_up_signs_the_user_in_and_notifies_subscribers() {
        let gateway = InMemoryIdentityGateway::new();
        let mut subscription = gateway.subscribe();
        let _ = subscription.next().await; // 初回通知を読み捨てる

        let principal = gateway.sign_up("a@x.com", "hunter2").await.unwrap();
        assert_eq!(principal.as_str(), "a@x.com");
        assert_eq!(
            subscription.next().await,
            Some(AuthState::Authenticated(principal))
        );
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let gateway = InMemoryIdentityGateway::new();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        let result = gateway.sign_up("a@x.com", "other").await;
        assert_eq!(
            result,
            Err(AuthError::EmailAlreadyRegistered("a@x.com".to_string()))
        );
    }

    #[tokio::test]
    async fn sign_in_rejects_unknown_emails_and_wrong_passwords() {
        let gateway = InMemoryIdentityGateway::new();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        assert_eq!(
            gateway.sign_in("b@x.com", "hunter2").await,
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            gateway.sign_in("a@x.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn sign_out_broadcasts_anonymous() {
        let gateway = InMemoryIdentityGateway::new();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        let mut subscription = gateway.subscribe();
        let _ = subscription.next().await; // 現在状態 = Authenticated

        gateway.sign_out().await.unwrap();
        assert_eq!(subscription.next().await, Some(AuthState::Anonymous));
    }

    #[tokio::test]
    async fn dropped_subscriptions_do_not_block_later_broadcasts() {
        let gateway = InMemoryIdentityGateway::new();

        let dropped = gateway.subscribe();
        drop(dropped);

        let mut kept = gateway.subscribe();
        let _ = kept.next().await;

        gateway.sign_up("a@x.com", "hunter2").await.unwrap();
        assert!(matches!(
            kept.next().await,
            Some(AuthState::Authenticated(_))
        ));
    }
}
