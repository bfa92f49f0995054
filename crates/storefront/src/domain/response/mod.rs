mod notification;
mod view;

pub use self::notification::{GENERIC_ERROR_MESSAGE, Notification, Variant};
pub use self::view::{ProductList, ViewState};
