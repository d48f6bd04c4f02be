use axum::{
    debug_handler,
    http::header,
    response::{IntoResponse, Redirect},
};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// The OpenAPI description of the message routes.
#[debug_handler]
pub async fn api_docs() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        include_res!(str, "/openapi.json"),
    )
}

#[debug_handler]
pub async fn index() -> Redirect {
    Redirect::to("/api-docs")
}
