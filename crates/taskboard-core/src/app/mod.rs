//! Application logic (session, board, auth flows).

pub mod auth;
pub mod board;
pub mod session;
pub mod status;

pub use self::auth::AuthController;
pub use self::board::{BoardController, StatusMessage, TaskDraft};
pub use self::session::SessionController;
pub use self::status::BoardCounts;
