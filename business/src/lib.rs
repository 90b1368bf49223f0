pub mod application {
    pub mod cooking {
        pub mod analyze_image;
        pub mod grocery_list;
        pub mod search_recipes;
    }
    pub mod food {
        pub mod add;
        pub mod delete;
        pub mod feedback;
        pub mod list_inventory;
        pub mod options;
        pub mod predict;
        pub mod stats;
        pub mod update;
    }
    pub mod nutrition {
        pub mod conditions;
        pub mod log_intake;
        pub mod profile;
        pub mod report;
        pub mod search_foods;
    }
    pub mod session {
        pub mod resolve;
        pub mod switch_user;
    }
    pub mod shopping {
        pub mod chat;
        pub mod forecast;
        pub mod history;
        pub mod recommendations;
        pub mod save_search;
        pub mod search;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod dates;
        pub mod value_objects;
    }
    pub mod cooking {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod analyze_image;
            pub mod grocery_list;
            pub mod search_recipes;
        }
    }
    pub mod food {
        pub mod errors;
        pub mod expiry;
        pub mod feedback;
        pub mod gateway;
        pub mod inventory;
        pub mod model;
        pub mod prediction;
        pub mod priority;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
            pub mod delete;
            pub mod feedback;
            pub mod list_inventory;
            pub mod options;
            pub mod predict;
            pub mod stats;
            pub mod update;
        }
    }
    pub mod nutrition {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod conditions;
            pub mod log_intake;
            pub mod profile;
            pub mod report;
            pub mod search_foods;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod resolve;
            pub mod switch_user;
        }
    }
    pub mod shopping {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod chat;
            pub mod forecast;
            pub mod history;
            pub mod recommendations;
            pub mod save_search;
            pub mod search;
        }
    }
}
