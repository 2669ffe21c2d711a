use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, header},
    response::Html,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::modules::customers::use_cases::manage_customers::inbound::http as customers_http;
use crate::modules::employees::use_cases::manage_employees::inbound::http as employees_http;
use crate::modules::projects::use_cases::manage_projects::inbound::http as projects_http;
use crate::modules::time_entries::use_cases::create_time_entry::inbound::http as create_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::submit_time_entries::inbound::http as submit_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/", get(health))
        .route("/employees", get(employees_http::list).post(employees_http::create))
        .route("/employees/{id}", put(employees_http::update))
        .route("/customers", get(customers_http::list).post(customers_http::create))
        .route("/customers/{id}", delete(customers_http::delete))
        .route("/projects", get(projects_http::list).post(projects_http::create))
        .route("/projects/{id}", delete(projects_http::delete))
        .route("/timeentries", get(list_http::handle).post(create_http::handle))
        .route("/timeentries/running", get(list_http::running))
        .route("/timeentries/submit", post(submit_http::handle))
        .route("/timeentries/submit_open", post(submit_http::handle))
        .route(
            "/timeentries/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "msg": "back office is running" }))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

/// Credentials are only allowed together with an explicit origin list.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, ?err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_credentials = !origins.is_empty();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_origin(allow_origin)
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ]))
        .allow_credentials(allow_credentials)
}
