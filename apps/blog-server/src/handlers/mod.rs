//! HTTP handlers and route configuration.

mod blog_posts;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blog-posts")
                .route("", web::get().to(blog_posts::list_posts))
                .route("", web::post().to(blog_posts::create_post))
                .route("/{id}", web::get().to(blog_posts::get_post))
                .route("/{id}", web::put().to(blog_posts::update_post))
                .route("/{id}", web::delete().to(blog_posts::delete_post)),
        );
}
