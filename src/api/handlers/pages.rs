// src/api/handlers/pages.rs

use actix_web::{http::header::ContentType, HttpResponse};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/js/script.js");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(SCRIPT_JS)
}
