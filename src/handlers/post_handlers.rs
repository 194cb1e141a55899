use actix_web::{HttpResponse, get, post, web};
use uuid::Uuid;

use crate::client::{self, ApiContext};
use crate::dtos::ApiResponse;
use crate::dtos::params::ListParams;
use crate::dtos::post_forms::{PostForm, PublishForm};
use crate::forms;
use crate::models::{ChangePostInput, Post, PostQuery};

use super::{AdminError, login_path, redirect_unauthorized, see_other};

#[get("/posts")]
pub async fn list_posts(
    ctx: ApiContext,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let query = PostQuery {
        locale: params.locale.clone(),
        pagination: params.pagination(),
        ..Default::default()
    };

    let posts = client::blogs::list_posts(&ctx, &query)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", posts)))
}

/// Blank editor: nothing to fetch, but it is still a page behind the
/// session guard.
#[get("/posts/new")]
pub async fn new_post(
    ctx: ApiContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();

    if ctx.token.is_none() {
        return Ok(see_other(&login_path(&subdomain)));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", Option::<Post>::None)))
}

#[get("/posts/{post_id}")]
pub async fn get_post(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (subdomain, post_id) = path.into_inner();

    let post = client::blogs::get_post(&ctx, post_id)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", post)))
}

#[post("/posts")]
pub async fn create_post(
    ctx: ApiContext,
    form: web::Form<PostForm>,
) -> Result<HttpResponse, AdminError> {
    let input = form.into_inner().into_create_input()?;
    let post = client::blogs::create_post(&ctx, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post successfully created", post)))
}

#[post("/posts/{post_id}")]
pub async fn update_post(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<PostForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, post_id) = path.into_inner();

    let input = form.into_inner().into_change_input()?;
    let post = client::blogs::change_post(&ctx, post_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post successfully updated", post)))
}

#[post("/posts/{post_id}/publish")]
pub async fn publish_post(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<PublishForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, post_id) = path.into_inner();

    let published_at = forms::normalize_timestamp(
        forms::require(&form.published_at, "published_at")?,
        "published_at",
    )?;

    let input = ChangePostInput {
        published_at: Some(Some(published_at)),
        ..Default::default()
    };
    let post = client::blogs::change_post(&ctx, post_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post successfully published", post)))
}

/// Clears `published_at` with an explicit null; omitting the field would
/// leave the post published.
#[post("/posts/{post_id}/unpublish")]
pub async fn unpublish_post(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (_, post_id) = path.into_inner();

    let input = ChangePostInput {
        published_at: Some(None),
        ..Default::default()
    };
    let post = client::blogs::change_post(&ctx, post_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post successfully unpublished", post)))
}
