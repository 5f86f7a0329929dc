use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, event, inbound, script, server},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "NodeManager API", description = "Server management dashboard backend"),
    paths(
        auth::login,
        auth::refresh,
        auth::logout,
        auth::get_user,
        server::get_servers,
        server::get_server_status,
        server::add_server_manual,
        server::add_server,
        server::edit_server,
        server::delete_server,
        script::get_scripts,
        script::run_scripts,
        script::reboot_servers,
        inbound::get_vless_keys,
        inbound::upsert_vless_key,
        inbound::get_inbound_tags,
        event::get_uptime_summary,
        event::get_server_events,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/servers", get(server::get_servers))
        .route("/api/server_status", get(server::get_server_status))
        .route("/api/add_server_manual", post(server::add_server_manual))
        .route("/api/add_server", post(server::add_server))
        .route("/api/edit_server", post(server::edit_server))
        .route("/api/delete_server", delete(server::delete_server))
        .route("/api/scripts", get(script::get_scripts))
        .route("/api/run_scripts", post(script::run_scripts))
        .route("/api/reboot_servers", post(script::reboot_servers))
        .route(
            "/api/vless_keys",
            get(inbound::get_vless_keys).post(inbound::upsert_vless_key),
        )
        .route("/api/inbound_tags", get(inbound::get_inbound_tags))
        .route("/api/uptime/summary", get(event::get_uptime_summary))
        .route("/api/server_events", get(event::get_server_events))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(|p| p.as_str()).collect();

        for path in [
            "/api/auth/login",
            "/api/auth/refresh",
            "/api/servers",
            "/api/delete_server",
            "/api/run_scripts",
            "/api/vless_keys",
            "/api/uptime/summary",
            "/api/server_events",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }
}
