use std::sync::Arc;

use business::domain::cart::model::Cart;

use crate::accessor::KeyValueAccessor;
use crate::key_value::store::KeyValueStore;

/// Storage key the storefront has always used for the cart.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

pub type CartStorage = KeyValueAccessor<Cart>;

pub fn cart_storage(store: Arc<dyn KeyValueStore>) -> CartStorage {
    KeyValueAccessor::new(store, CART_STORAGE_KEY)
}
