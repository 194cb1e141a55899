use uuid::Uuid;

use crate::models::{
    Category, CategoryQuery, ChangeCategoryInput, ChangeClippingItemInput, ClippingItem,
    ClippingItemQuery, CreateCategoryInput, CreateClippingItemInput,
};

use super::{ApiContext, ApiError, decode, expect_success};

pub async fn list_categories(
    ctx: &ApiContext,
    query: &CategoryQuery,
) -> Result<Vec<Category>, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/clippings/admin/categories"))
        .headers(ctx.headers()?)
        .query(&query.pairs())
        .send()
        .await?;
    decode(resp).await
}

pub async fn create_category(
    ctx: &ApiContext,
    input: &CreateCategoryInput,
) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/clippings/admin/categories"))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn get_category(ctx: &ApiContext, category_id: Uuid) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url(&format!("/clippings/admin/categories/{category_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    decode(resp).await
}

pub async fn change_category(
    ctx: &ApiContext,
    category_id: Uuid,
    input: &ChangeCategoryInput,
) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/clippings/admin/categories/{category_id}")))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn delete_category(ctx: &ApiContext, category_id: Uuid) -> Result<(), ApiError> {
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/clippings/admin/categories/{category_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    expect_success(resp).await
}

pub async fn list_items(
    ctx: &ApiContext,
    query: &ClippingItemQuery,
) -> Result<Vec<ClippingItem>, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/clippings/admin/items"))
        .headers(ctx.headers()?)
        .query(&query.pairs())
        .send()
        .await?;
    decode(resp).await
}

pub async fn create_item(
    ctx: &ApiContext,
    input: &CreateClippingItemInput,
) -> Result<ClippingItem, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/clippings/admin/items"))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn get_item(ctx: &ApiContext, item_id: Uuid) -> Result<ClippingItem, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url(&format!("/clippings/admin/items/{item_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    decode(resp).await
}

pub async fn change_item(
    ctx: &ApiContext,
    item_id: Uuid,
    input: &ChangeClippingItemInput,
) -> Result<ClippingItem, ApiError> {
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/clippings/admin/items/{item_id}")))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}
