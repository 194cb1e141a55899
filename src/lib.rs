pub mod client;
pub mod config;
pub mod dtos;
pub mod forms;
pub mod handlers;
pub mod locales;
pub mod middleware;
pub mod models;

use actix_web::web;

use crate::config::AppConfig;

/// Shared, read-only after startup. The reqwest client is cloned into each
/// request's `ApiContext`; clones share the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("consub-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build http client");
        AppState {
            config,
            http_client,
        }
    }
}

/// Full route table. Literal segments (`/posts/categories`) are registered
/// ahead of their `{id}` siblings so they win the match.
pub fn routes(cfg: &mut web::ServiceConfig) {
    use crate::handlers::{auth_handlers, category_handlers, clipping_handlers, media_handlers, post_handlers};

    cfg.service(auth_handlers::check_account).service(
        web::scope("/admin/{subdomain}")
            .service(auth_handlers::admin_index)
            .service(auth_handlers::login)
            .service(auth_handlers::logout)
            .service(auth_handlers::dashboard)
            .service(category_handlers::list_post_categories)
            .service(category_handlers::create_post_category)
            .service(category_handlers::get_post_category)
            .service(category_handlers::update_post_category)
            .service(category_handlers::delete_post_category)
            .service(post_handlers::list_posts)
            .service(post_handlers::create_post)
            .service(post_handlers::new_post)
            .service(post_handlers::get_post)
            .service(post_handlers::update_post)
            .service(post_handlers::publish_post)
            .service(post_handlers::unpublish_post)
            .service(category_handlers::list_clipping_categories)
            .service(category_handlers::create_clipping_category)
            .service(category_handlers::get_clipping_category)
            .service(category_handlers::update_clipping_category)
            .service(category_handlers::delete_clipping_category)
            .service(clipping_handlers::list_items)
            .service(clipping_handlers::create_item)
            .service(clipping_handlers::new_item)
            .service(clipping_handlers::get_item)
            .service(clipping_handlers::update_item)
            .service(clipping_handlers::publish_item)
            .service(clipping_handlers::unpublish_item)
            .service(media_handlers::list_images)
            .service(media_handlers::upload_image),
    );
}
