use shared::model::Product;

/// Products to display. `Found(vec![])` means the backend answered with an
/// empty list; `NotFound` means it confirmed there are no matches.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductList {
    Found(Vec<Product>),
    NotFound,
}

impl ProductList {
    pub fn empty() -> Self {
        ProductList::Found(Vec::new())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductList::NotFound)
    }

    pub fn products(&self) -> &[Product] {
        match self {
            ProductList::Found(products) => products,
            ProductList::NotFound => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(ProductList),
}
