use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::StorageError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.invalid_amount")]
    InvalidAmount,
    #[error("cart.not_in_cart")]
    NotInCart,
    #[error("cart.duplicate_product")]
    DuplicateProduct,
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Storage(#[from] StorageError),
}
