//! Status - ボードの集計ビュー

use serde::{Deserialize, Serialize};

/// 現在のタスク一覧の集計（ヘッダ表示などに使う読み取り専用ビュー）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCounts {
    pub total: usize,
    pub open: usize,
    pub completed: usize,
}
