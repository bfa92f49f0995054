use crate::domain::response::Notification;
use std::sync::Arc;

pub type DynNotifier = Arc<dyn NotifierTrait + Send + Sync>;

/// User-facing notification channel. Implementations must not block.
pub trait NotifierTrait {
    fn notify(&self, notification: Notification);
}
