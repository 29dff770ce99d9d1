//! Domain model (tasks, identity, session state, errors).

pub mod errors;
pub mod ids;
pub mod principal;
pub mod priority;
pub mod session;
pub mod task;

pub use self::errors::{AuthError, StoreError, ValidationError};
pub use self::ids::TaskId;
pub use self::principal::Principal;
pub use self::priority::{ParsePriorityError, Priority};
pub use self::session::SessionState;
pub use self::task::{NewTask, Task, TaskPatch};
