// Composition root for the back office.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the store and the project filesystem.
// - Wire them into use case handlers and expose HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
