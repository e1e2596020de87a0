//! Static asset server for the Pong arcade game.
//!
//! One templated route serves the HTML shell; static mounts expose the
//! sprite assets and the wasm package. Anything that fails maps to the
//! templated error page with its status code.

mod pages;

use actix_files::Files;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::ContentType;
use actix_web::middleware::{self, ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::index_page("Pong game!"))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Replace any error response's body with the templated error page
fn render_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let status = res.status();
    let (req, _) = res.into_parts();
    let page = HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(pages::error_page(status));
    let res = ServiceResponse::new(req, page).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(Files::new("/assets", "web_server/static/assets"))
        .service(Files::new("/pkg", "client_wasm/pkg"))
        .default_service(web::to(not_found));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Pong web-server!");
    tracing::info!("Port: listening on port {}", port);
    tracing::info!("URL: http://localhost:{}", port);

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(ErrorHandlers::new().default_handler(render_error))
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
