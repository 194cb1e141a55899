use actix_web::{HttpResponse, get, post, web};
use uuid::Uuid;

use crate::client::{self, ApiContext};
use crate::dtos::ApiResponse;
use crate::dtos::category_forms::CategoryForm;
use crate::dtos::params::ListParams;
use crate::models::{CategoryQuery, PostCategoryQuery};

use super::{AdminError, redirect_unauthorized};

// Two parallel sets of routes: blog post categories live under the blogs
// service, clipping categories under the clippings service. The form and
// response shapes are identical.

#[get("/posts/categories")]
pub async fn list_post_categories(
    ctx: ApiContext,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let query = PostCategoryQuery {
        locale: params.locale.clone(),
        ..Default::default()
    };

    let categories = client::blogs::list_post_categories(&ctx, &query)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", categories)))
}

#[get("/posts/categories/{category_id}")]
pub async fn get_post_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (subdomain, category_id) = path.into_inner();

    let category = client::blogs::get_post_category(&ctx, category_id)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", category)))
}

#[post("/posts/categories")]
pub async fn create_post_category(
    ctx: ApiContext,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, AdminError> {
    let input = form.into_inner().into_create_input()?;
    let category = client::blogs::create_post_category(&ctx, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully created", category)))
}

#[post("/posts/categories/{category_id}")]
pub async fn update_post_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, category_id) = path.into_inner();

    let input = form.into_inner().into_change_input()?;
    let category = client::blogs::change_post_category(&ctx, category_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully updated", category)))
}

#[post("/posts/categories/{category_id}/delete")]
pub async fn delete_post_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (_, category_id) = path.into_inner();

    client::blogs::delete_post_category(&ctx, category_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully deleted", ())))
}

#[get("/clipping/categories")]
pub async fn list_clipping_categories(
    ctx: ApiContext,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let query = CategoryQuery {
        locale: params.locale.clone(),
        pagination: params.pagination(),
        ..Default::default()
    };

    let categories = client::clippings::list_categories(&ctx, &query)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", categories)))
}

#[get("/clipping/categories/{category_id}")]
pub async fn get_clipping_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (subdomain, category_id) = path.into_inner();

    let category = client::clippings::get_category(&ctx, category_id)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", category)))
}

#[post("/clipping/categories")]
pub async fn create_clipping_category(
    ctx: ApiContext,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, AdminError> {
    let input = form.into_inner().into_create_input()?;
    let category = client::clippings::create_category(&ctx, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully created", category)))
}

#[post("/clipping/categories/{category_id}")]
pub async fn update_clipping_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, category_id) = path.into_inner();

    let input = form.into_inner().into_change_input()?;
    let category = client::clippings::change_category(&ctx, category_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully updated", category)))
}

#[post("/clipping/categories/{category_id}/delete")]
pub async fn delete_clipping_category(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (_, category_id) = path.into_inner();

    client::clippings::delete_category(&ctx, category_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Category successfully deleted", ())))
}
