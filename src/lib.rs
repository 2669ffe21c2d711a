pub mod shared {
    pub mod core {
        pub mod nullable;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod filesystem;
        pub mod http;
        pub mod unit_of_work;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod duration;
            pub mod overlap;
            pub mod policy;
            pub mod ports;
            pub mod submission;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod overlap_guard;
            pub mod create_time_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod submit_time_entries {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod manage_employees {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod customers {
        pub mod core {
            pub mod customer;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod manage_customers {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod projects {
        pub mod core {
            pub mod ports;
            pub mod project;
        }
        pub mod use_cases {
            pub mod manage_projects {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
