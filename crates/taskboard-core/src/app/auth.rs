//! AuthController - ログイン / 登録フォームの制御
//!
//! 資格情報を IdentityGateway に渡し、結果で遷移またはエラー表示を行います。
//! 多重送信はビジーフラグで抑止します。
//!
//! エラーメッセージはゲートウェイの返したものをそのまま出します
//! （ストア系と違い、資格情報の誤りはユーザー自身が直せるため）。

use std::sync::Arc;

use tracing::debug;

use crate::ports::{IdentityGateway, Navigator, Route};

/// AuthController はログイン・登録フローの状態を所有
pub struct AuthController {
    gateway: Arc<dyn IdentityGateway>,
    navigator: Arc<dyn Navigator>,
    busy: bool,
    error: Option<String>,
}

impl AuthController {
    pub fn new(gateway: Arc<dyn IdentityGateway>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            gateway,
            navigator,
            busy: false,
            error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// サインイン（成功でボードへ遷移）
    pub async fn sign_in(&mut self, email: &str, password: &str) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        match self.gateway.sign_in(email, password).await {
            Ok(principal) => {
                debug!(%principal, "signed in");
                self.navigator.navigate(Route::Board);
            }
            Err(error) => self.error = Some(error.to_string()),
        }
        self.busy = false;
    }

    /// 登録（成功でログイン画面へ遷移）
    pub async fn sign_up(&mut self, email: &str, password: &str) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.error = None;

        match self.gateway.sign_up(email, password).await {
            Ok(principal) => {
                debug!(%principal, "registered");
                self.navigator.navigate(Route::Login);
            }
            Err(error) => self.error = Some(error.to_string()),
        }
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryIdentityGateway;
    use crate::ports::RecordingNavigator;

    fn controller() -> (Arc<InMemoryIdentityGateway>, Arc<RecordingNavigator>, AuthController) {
        let gateway = Arc::new(InMemoryIdentityGateway::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let controller = AuthController::new(gateway.clone(), navigator.clone());
        (gateway, navigator, controller)
    }

    #[tokio::test]
    async fn successful_sign_in_navigates_to_the_board() {
        let (gateway, navigator, mut auth) = controller();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        auth.sign_in("a@x.com", "hunter2").await;

        assert!(auth.error().is_none());
        assert!(!auth.is_busy());
        // 登録時の遷移は AuthController を通っていないので Board のみ
        assert_eq!(navigator.visited(), vec![Route::Board]);
    }

    #[tokio::test]
    async fn failed_sign_in_surfaces_the_gateway_message_verbatim() {
        let (_, navigator, mut auth) = controller();

        auth.sign_in("a@x.com", "wrong").await;

        assert_eq!(auth.error(), Some("invalid email or password"));
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn successful_registration_navigates_to_the_login_view() {
        let (_, navigator, mut auth) = controller();

        auth.sign_up("a@x.com", "hunter2").await;

        assert!(auth.error().is_none());
        assert_eq!(navigator.visited(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn duplicate_registration_shows_an_error_and_stays_put() {
        let (gateway, navigator, mut auth) = controller();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        auth.sign_up("a@x.com", "other").await;

        assert_eq!(
            auth.error(),
            Some("email is already registered: a@x.com")
        );
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn a_new_attempt_clears_the_previous_error() {
        let (gateway, _, mut auth) = controller();
        gateway.sign_up("a@x.com", "hunter2").await.unwrap();

        auth.sign_in("a@x.com", "wrong").await;
        assert!(auth.error().is_some());

        auth.sign_in("a@x.com", "hunter2").await;
        assert!(auth.error().is_none());
    }
}
