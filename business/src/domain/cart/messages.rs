use super::errors::CartError;

pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";
pub const ADD_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";

/// Public cart operations, used to pick the toast shown when one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    pub fn failure_message(self, error: &CartError) -> &'static str {
        match (self, error) {
            (CartOperation::RemoveProduct, _) => REMOVE_FAILED,
            (_, CartError::OutOfStock | CartError::InvalidAmount) => OUT_OF_STOCK,
            (CartOperation::AddProduct, _) => ADD_FAILED,
            (CartOperation::UpdateProductAmount, _) => UPDATE_FAILED,
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::AddProduct => write!(f, "add_product"),
            CartOperation::RemoveProduct => write!(f, "remove_product"),
            CartOperation::UpdateProductAmount => write!(f, "update_product_amount"),
        }
    }
}
