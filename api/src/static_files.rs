use actix_web::{web, HttpResponse};
use rust_embed::RustEmbed;

// Stylesheets and other assets, embedded at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticAssets;

/// Serve an embedded asset with a guessed content type
pub async fn serve(path: web::Path<String>) -> HttpResponse {
    let path = path.into_inner();

    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(content.data.into_owned())
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
