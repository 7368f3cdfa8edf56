//! Model layer - state and transitions, free of any rendering
//!
//! - `Registry` - static component metadata
//! - `ModalState` - component information overlay
//! - `ViewToggle` - motherboard / BIOS view switch
//! - `NotificationQueue` - transient messages
//! - `Scheduler` - cancellable deferred actions

pub mod modal;
pub mod notification;
pub mod registry;
pub mod scheduler;
pub mod ui;
pub mod view;

pub use modal::{Dialog, ModalState};
pub use notification::{NotificationQueue, Phase};
pub use registry::{ComponentRecord, Registry};
pub use scheduler::{Scheduler, TaskToken};
pub use ui::AppMode;
pub use view::{HandlerSet, ViewState, ViewToggle};
