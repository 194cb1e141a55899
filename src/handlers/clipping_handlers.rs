use actix_web::{HttpRequest, HttpResponse, get, post, web};
use futures::future::try_join_all;
use serde::Serialize;
use uuid::Uuid;

use crate::client::{self, ApiContext};
use crate::dtos::ApiResponse;
use crate::dtos::clipping_forms::ClippingItemForm;
use crate::dtos::params::ListParams;
use crate::dtos::post_forms::PublishForm;
use crate::forms;
use crate::locales;
use crate::models::{Category, CategoryQuery, ChangeClippingItemInput, ClippingItem, ClippingItemQuery};

use super::{AdminError, redirect_unauthorized};

#[derive(Debug, Serialize)]
struct ClippingListPage {
    items: Vec<ClippingItem>,
    categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
struct ClippingEditPage {
    item: Option<ClippingItem>,
    categories: Vec<Category>,
    languages: Vec<String>,
    header_language: String,
}

fn accept_language(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
}

/// Listing page: fetch the items, then resolve each distinct category id
/// concurrently. The join happens before the response is built; one failed
/// lookup fails the whole page.
#[get("/clipping")]
pub async fn list_items(
    ctx: ApiContext,
    path: web::Path<String>,
    params: web::Query<ListParams>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let query = ClippingItemQuery {
        locale: params.locale.clone(),
        pagination: params.pagination(),
        ..Default::default()
    };

    let items = client::clippings::list_items(&ctx, &query)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    let mut category_ids: Vec<Uuid> = items.iter().filter_map(|item| item.category_id).collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let lookups = category_ids
        .iter()
        .map(|id| client::clippings::get_category(&ctx, *id));
    let categories = try_join_all(lookups)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", ClippingListPage { items, categories })))
}

/// Blank editor: the category picker and locales without an item to load.
#[get("/clipping/new")]
pub async fn new_item(
    req: HttpRequest,
    ctx: ApiContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let header = accept_language(&req);

    let categories = client::clippings::list_categories(&ctx, &CategoryQuery::default())
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "",
        ClippingEditPage {
            item: None,
            categories,
            languages: locales::parse(header),
            header_language: locales::header_language(header),
        },
    )))
}

/// Edit page load: the category picker and the request's locales come along
/// with the item itself.
#[get("/clipping/{item_id}")]
pub async fn get_item(
    req: HttpRequest,
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (subdomain, item_id) = path.into_inner();
    let header = accept_language(&req);

    let categories = client::clippings::list_categories(&ctx, &CategoryQuery::default())
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    let item = client::clippings::get_item(&ctx, item_id)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "",
        ClippingEditPage {
            item: Some(item),
            categories,
            languages: locales::parse(header),
            header_language: locales::header_language(header),
        },
    )))
}

#[post("/clipping")]
pub async fn create_item(
    ctx: ApiContext,
    form: web::Form<ClippingItemForm>,
) -> Result<HttpResponse, AdminError> {
    let input = form.into_inner().into_create_input()?;
    let item = client::clippings::create_item(&ctx, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Clipping item successfully created", item)))
}

#[post("/clipping/{item_id}")]
pub async fn update_item(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<ClippingItemForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, item_id) = path.into_inner();

    let input = form.into_inner().into_change_input()?;
    let item = client::clippings::change_item(&ctx, item_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Clipping item successfully updated", item)))
}

#[post("/clipping/{item_id}/publish")]
pub async fn publish_item(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
    form: web::Form<PublishForm>,
) -> Result<HttpResponse, AdminError> {
    let (_, item_id) = path.into_inner();

    let published_at = forms::normalize_timestamp(
        forms::require(&form.published_at, "published_at")?,
        "published_at",
    )?;

    let input = ChangeClippingItemInput {
        published_at: Some(Some(published_at)),
        ..Default::default()
    };
    let item = client::clippings::change_item(&ctx, item_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Clipping item successfully published", item)))
}

#[post("/clipping/{item_id}/unpublish")]
pub async fn unpublish_item(
    ctx: ApiContext,
    path: web::Path<(String, Uuid)>,
) -> Result<HttpResponse, AdminError> {
    let (_, item_id) = path.into_inner();

    let input = ChangeClippingItemInput {
        published_at: Some(None),
        ..Default::default()
    };
    let item = client::clippings::change_item(&ctx, item_id, &input).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Clipping item successfully unpublished",
        item,
    )))
}
