pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod controller;
        pub mod remove_product;
        pub mod update_product_amount;
        #[cfg(test)]
        pub mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod storage;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod cart {
        pub mod errors;
        pub mod messages;
        pub mod model;
        pub mod use_cases;
    }
}
