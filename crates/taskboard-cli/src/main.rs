use std::sync::Arc;

use taskboard_core::app::{AuthController, BoardController, SessionController};
use taskboard_core::domain::Priority;
use taskboard_core::impls::{InMemoryDocumentStore, InMemoryIdentityGateway};
use taskboard_core::ports::{Navigator, Route, SystemClock, UlidGenerator};
use taskboard_core::repository::TaskRepository;

/// デモ用: 遷移をそのまま標準出力へ流す Navigator
struct PrintlnNavigator;

impl Navigator for PrintlnNavigator {
    fn navigate(&self, route: Route) {
        println!("navigate -> {}", route.path());
    }
}

fn print_board(board: &BoardController) {
    let counts = board.counts();
    println!(
        "board: total={} open={} completed={}",
        counts.total, counts.open, counts.completed
    );
    for task in board.tasks() {
        println!(
            "  [{}] {} ({}) - {}",
            if task.completed { "x" } else { " " },
            task.title,
            task.priority,
            task.description
        );
    }
    if let Some(status) = board.status() {
        println!("  status: {status}");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // (A) in-memory 実装で配線（本番はマネージドな auth / document store を差す）
    let store = Arc::new(InMemoryDocumentStore::new(UlidGenerator::new(SystemClock)));
    let gateway = Arc::new(InMemoryIdentityGateway::new());
    let navigator = Arc::new(PrintlnNavigator);

    let mut board = BoardController::new(TaskRepository::new(store.clone()));
    let mut session = SessionController::new(gateway.clone(), navigator.clone());
    let mut auth = AuthController::new(gateway.clone(), navigator.clone());

    // (B) 認証状態を購読（最初に現在状態 = 未認証が流れ、ログインへリダイレクト）
    let mut subscription = session.subscribe();
    let event = subscription.next().await.expect("gateway is alive");
    session.apply(event, &mut board).await;

    // (C) 登録（登録と同時にサインインされ、購読経由でボードがロードされる）
    auth.sign_up("a@x.com", "hunter2").await;
    let event = subscription.next().await.expect("gateway is alive");
    session.apply(event, &mut board).await;
    print_board(&board);

    // (D) タスクを 1 件作成
    {
        let draft = board.draft_mut();
        draft.title = "Buy milk".to_string();
        draft.description = "2%".to_string();
        draft.priority = Priority::Low;
    }
    board.submit().await;
    print_board(&board);

    // (E) 完了トグル → 優先度を High に編集 → 削除
    let id = board.tasks()[0].id.clone();
    board.toggle_completion(&id).await;
    print_board(&board);

    board.begin_edit(&id);
    board.draft_mut().priority = Priority::High;
    board.submit().await;
    print_board(&board);

    board.remove(&id).await;
    print_board(&board);

    // (F) サインアウト（購読経由でボードが破棄され、ログインへ戻る）
    session.sign_out(&mut board).await;
    let event = subscription.next().await.expect("gateway is alive");
    session.apply(event, &mut board).await;
    println!("session: {:?}", session.state());
}
