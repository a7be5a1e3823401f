pub mod accessor;
pub mod cart;
pub mod key_value {
    pub mod file;
    pub mod memory;
    pub mod store;
}
