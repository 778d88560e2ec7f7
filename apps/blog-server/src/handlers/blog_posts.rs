//! Blog post handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost, parse_post_id};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// GET /blog-posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<BlogPostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blog-posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(&raw_id))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /blog-posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewBlogPost::try_from_parts(req.title, req.content, req.author)?;

    let created = state.posts.create(new_post.into()).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %created.id,
        "Blog post created"
    );

    Ok(HttpResponse::Created().json(to_response(created)))
}

/// PUT /blog-posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref().filter(|body_id| *body_id != raw_id) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({raw_id}) and request body id ({body_id}) must match"
        )));
    }

    let changes = BlogPostChanges {
        title: req.title,
        content: req.content,
        author: req.author,
    };
    changes.validate()?;

    state
        .posts
        .update(id, changes)
        .await
        .map_err(|e| repo_error(e, &raw_id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blog-posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_post_id(&raw_id)?;

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| repo_error(e, &raw_id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author,
        publish_date: post.publish_date.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn post_not_found(raw_id: &str) -> AppError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id: raw_id.to_string(),
    }
    .into()
}

fn repo_error(err: RepoError, raw_id: &str) -> AppError {
    match err {
        RepoError::NotFound => post_not_found(raw_id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use blog_infra::InMemoryBlogPostRepository;
    use serde_json::{Value, json};

    use crate::server::configure_app;
    use crate::state::AppState;

    fn empty_state() -> AppState {
        AppState::new(Arc::new(InMemoryBlogPostRepository::new()))
    }

    #[actix_web::test]
    async fn test_list_on_empty_store_returns_empty_array() {
        let app = test::init_service(App::new().configure(configure_app(empty_state(), 4096))).await;

        let req = test::TestRequest::get().uri("/blog-posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_get_returns_created_post() {
        let app = test::init_service(App::new().configure(configure_app(empty_state(), 4096))).await;

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({"title": "t", "content": "c", "author": "a"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{id}"))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_missing_field_is_problem_details() {
        let app = test::init_service(App::new().configure(configure_app(empty_state(), 4096))).await;

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({"title": "t", "author": "a"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert!(body["detail"].as_str().unwrap().contains("`content`"));
    }

    #[actix_web::test]
    async fn test_oversized_body_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_app(empty_state(), 64))).await;

        let req = test::TestRequest::post()
            .uri("/blog-posts")
            .set_json(json!({"title": "t", "content": "x".repeat(256), "author": "a"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_unknown_post_is_not_found() {
        let app = test::init_service(App::new().configure(configure_app(empty_state(), 4096))).await;

        let req = test::TestRequest::get()
            .uri(&format!("/blog-posts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
