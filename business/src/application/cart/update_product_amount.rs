use crate::application::cart::controller::CartStateController;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::UpdateProductAmountParams;

impl CartStateController {
    pub(crate) async fn try_update_product_amount(
        &self,
        params: UpdateProductAmountParams,
    ) -> Result<Cart, CartError> {
        let amount = u32::try_from(params.amount)
            .ok()
            .filter(|amount| *amount >= 1)
            .ok_or(CartError::InvalidAmount)?;

        let stock = self.catalog.get_stock(params.product_id).await?;

        self.commit(|cart| cart.with_amount(params.product_id, amount, &stock).map(Some))?
            .ok_or(CartError::NotInCart)
    }
}
