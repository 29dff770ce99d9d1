//! BoardController - タスクボードの中心ロジック
//!
//! タスク一覧・編集バッファ・ステータスメッセージを所有し、
//! create / update / delete を TaskRepository 経由で実行します。
//! 変更が成功するたびに一覧を全件リロードして、表示とストアの乖離を防ぎます
//! （差分適用はしない。1 変更 = 1 往復のコストで正確さを買う）。
//!
//! # 失敗時の方針
//! - 変更系の失敗は StatusMessage に変換（ビューへは throw しない）
//! - 楽観更新はしないので、失敗時のロールバックも不要（一覧は前のまま）
//! - 保存失敗時は編集バッファを保持（入力し直さずにリトライできる）

use std::fmt;

use tracing::debug;

use crate::domain::{NewTask, Principal, Priority, Task, TaskId, TaskPatch, ValidationError};
use crate::repository::TaskRepository;

use super::status::BoardCounts;

/// 編集フォームの未保存状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskDraft {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// ビューに出す一行ステータス
///
/// 静的な文字列のみ。エラーコードやリトライ UI は持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    MissingFields,
    SaveFailed,
    UpdateFailed,
    DeleteFailed,
    SignOutFailed,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusMessage::MissingFields => "Please fill in both the title and description.",
            StatusMessage::SaveFailed => "Unable to save the task. Please try again.",
            StatusMessage::UpdateFailed => "Could not update that task.",
            StatusMessage::DeleteFailed => "Could not delete that task.",
            StatusMessage::SignOutFailed => "Unable to log out. Please try again.",
        };
        f.write_str(text)
    }
}

/// BoardController はタスクボードの状態と操作を所有
///
/// 一覧はストアが返した順のまま保持する（クライアント側ではソートしない）。
pub struct BoardController {
    repository: TaskRepository,
    owner: Option<Principal>,
    tasks: Vec<Task>,
    draft: TaskDraft,
    editing: Option<TaskId>,
    status: Option<StatusMessage>,
    saving: bool,
}

impl BoardController {
    pub fn new(repository: TaskRepository) -> Self {
        Self {
            repository,
            owner: None,
            tasks: Vec::new(),
            draft: TaskDraft::default(),
            editing: None,
            status: None,
            saving: false,
        }
    }

    // --- ビューに公開する読み取り ---

    pub fn owner(&self) -> Option<&Principal> {
        self.owner.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// フォーム入力の反映用
    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn counts(&self) -> BoardCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        BoardCounts {
            total: self.tasks.len(),
            open: self.tasks.len() - completed,
            completed,
        }
    }

    // --- 操作 ---

    /// owner のタスク一覧で全置換
    ///
    /// 認証確立時と、すべての変更成功後に呼ばれる。
    pub async fn load(&mut self, owner: &Principal) {
        self.owner = Some(owner.clone());
        self.tasks = self.repository.read_all_for_owner(owner).await;
        debug!(%owner, count = self.tasks.len(), "board loaded");
    }

    /// 編集バッファを保存（editing 中なら update、そうでなければ create）
    ///
    /// - 保存中 / 未認証なら何もしない
    /// - 検証失敗はストア呼び出しなしでステータスだけ立てる
    /// - 成功でバッファと editing をクリアして全件リロード
    /// - 失敗でバッファを保持したまま StatusMessage::SaveFailed
    pub async fn submit(&mut self) {
        if self.saving {
            return;
        }
        let Some(owner) = self.owner.clone() else {
            return;
        };

        let title = self.draft.title.trim().to_string();
        let description = self.draft.description.trim().to_string();
        if let Err(error) = validate(&title, &description) {
            debug!(%error, "rejected draft before any store call");
            self.status = Some(StatusMessage::MissingFields);
            return;
        }

        self.saving = true;
        self.status = None;

        let result = match &self.editing {
            // 編集パス: 完了フラグには触れない
            Some(id) => {
                self.repository
                    .update(
                        id,
                        TaskPatch::Content {
                            title,
                            description,
                            priority: self.draft.priority,
                        },
                    )
                    .await
            }
            None => self
                .repository
                .create(NewTask::new(
                    title,
                    description,
                    self.draft.priority,
                    owner.clone(),
                ))
                .await
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.draft.reset();
                self.editing = None;
                self.load(&owner).await;
            }
            Err(error) => {
                debug!(%error, "save failed; draft kept for retry");
                self.status = Some(StatusMessage::SaveFailed);
            }
        }
        self.saving = false;
    }

    /// 完了フラグを反転して全件リロード
    ///
    /// 楽観更新はしない。表示が変わるのはリロード成功後。
    pub async fn toggle_completion(&mut self, id: &TaskId) {
        let Some(owner) = self.owner.clone() else {
            return;
        };
        let Some(task) = self.tasks.iter().find(|t| &t.id == id) else {
            return;
        };

        let patch = TaskPatch::Completion(!task.completed);
        match self.repository.update(id, patch).await {
            Ok(()) => self.load(&owner).await,
            Err(error) => {
                debug!(%error, "toggle failed");
                self.status = Some(StatusMessage::UpdateFailed);
            }
        }
    }

    /// タスクを削除して全件リロード
    pub async fn remove(&mut self, id: &TaskId) {
        let Some(owner) = self.owner.clone() else {
            return;
        };

        match self.repository.delete(id).await {
            Ok(()) => self.load(&owner).await,
            Err(error) => {
                debug!(%error, "delete failed");
                self.status = Some(StatusMessage::DeleteFailed);
            }
        }
    }

    /// 一覧上のタスクを編集バッファへコピー
    ///
    /// 再フェッチはしない。手元の一覧が古い可能性は single-user /
    /// single-tab の前提で受け入れる。
    pub fn begin_edit(&mut self, id: &TaskId) {
        let Some(task) = self.tasks.iter().find(|t| &t.id == id) else {
            return;
        };
        self.draft = TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
        };
        self.editing = Some(task.id.clone());
        self.status = None;
    }

    /// 編集を取りやめてバッファをクリア（ストア呼び出しなし）
    pub fn cancel_edit(&mut self) {
        self.draft.reset();
        self.editing = None;
    }

    /// サインアウト時: ボードの状態をすべて破棄
    pub fn clear(&mut self) {
        self.owner = None;
        self.tasks.clear();
        self.draft.reset();
        self.editing = None;
        self.status = None;
    }

    /// ビュー側がステータスを出したいとき用（サインアウト失敗など）
    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

fn validate(title: &str, description: &str) -> Result<(), ValidationError> {
    if title.is_empty() || description.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}
