mod search;

pub use self::search::SearchProducts;
