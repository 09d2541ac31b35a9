pub mod shared {
    pub mod core {
        pub mod ids;
    }
}

pub mod modules {
    pub mod licenses {
        pub mod core {
            pub mod errors;
            pub mod license;
            pub mod ports;
            pub mod stats;
        }
        pub mod repository;
        pub mod use_cases {
            pub mod list_licenses {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_license {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_license {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_license {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_license {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_user {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod license_stats {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod import_licenses {
                pub mod decide;
                pub mod record;
                pub mod source;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod in_memory_store;
                pub mod json_file_store;
            }
        }
    }
}

pub mod shell;
