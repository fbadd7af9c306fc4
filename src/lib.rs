pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod users_in_memory;
                #[cfg(feature = "mongodb")]
                pub mod users_mongodb;
            }
        }
    }
}

pub mod shell;
