use crate::application::cart::controller::CartStateController;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::ProductId;

impl CartStateController {
    pub(crate) fn try_remove_product(&self, product_id: ProductId) -> Result<Cart, CartError> {
        self.commit(|cart| cart.without(product_id).map(Some))?
            .ok_or(CartError::NotInCart)
    }
}
