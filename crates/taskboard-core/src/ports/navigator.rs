//! Navigator port - ビュー遷移の抽象化
//!
//! 「未認証ならログイン画面へ」のようなリダイレクト副作用を
//! コントローラから切り離します。

use std::sync::Mutex;

/// 遷移先ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// ログイン画面
    Login,

    /// タスクボード（トップ）
    Board,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Board => "/",
        }
    }
}

/// Navigator はビュー遷移の副作用を実行
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// テスト用: 遷移を記録するだけの Navigator
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}
