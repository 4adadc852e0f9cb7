use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// 单页前端
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
