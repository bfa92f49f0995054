mod notification;
mod product;

pub use self::notification::{DynNotifier, NotifierTrait};
pub use self::product::{DynProductGateway, ProductGatewayTrait};
