use actix_web::{get, HttpResponse};

use crate::services::http_helpers::html_page;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index() -> HttpResponse {
    html_page(INDEX_HTML)
}
