pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod disable;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod replace_image;
        pub mod toggle_like;
        pub mod update;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod model;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod disable;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod replace_image;
            pub mod toggle_like;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
