mod catalog;
mod debounce;
mod notification;
mod product;
mod search;

pub use self::catalog::CatalogLoader;
pub use self::debounce::SearchDebouncer;
pub use self::notification::{ChannelNotifier, LogNotifier};
pub use self::product::ProductHttpClientService;
pub use self::search::SearchExecutor;
