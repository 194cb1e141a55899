use uuid::Uuid;

use crate::models::{
    Category, ChangeCategoryInput, ChangePostInput, CreateCategoryInput, CreatePostInput, Post,
    PostCategoryQuery, PostQuery,
};

use super::{ApiContext, ApiError, decode, expect_success};

pub async fn list_post_categories(
    ctx: &ApiContext,
    query: &PostCategoryQuery,
) -> Result<Vec<Category>, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/admin/blogs/categories"))
        .headers(ctx.headers()?)
        .query(&query.pairs())
        .send()
        .await?;
    decode(resp).await
}

pub async fn create_post_category(
    ctx: &ApiContext,
    input: &CreateCategoryInput,
) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/admin/blogs/categories"))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn get_post_category(ctx: &ApiContext, category_id: Uuid) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url(&format!("/admin/blogs/categories/{category_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    decode(resp).await
}

pub async fn change_post_category(
    ctx: &ApiContext,
    category_id: Uuid,
    input: &ChangeCategoryInput,
) -> Result<Category, ApiError> {
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/admin/blogs/categories/{category_id}")))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn delete_post_category(ctx: &ApiContext, category_id: Uuid) -> Result<(), ApiError> {
    let resp = ctx
        .client
        .delete(ctx.url(&format!("/admin/blogs/categories/{category_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    expect_success(resp).await
}

pub async fn list_posts(ctx: &ApiContext, query: &PostQuery) -> Result<Vec<Post>, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/admin/blogs/posts"))
        .headers(ctx.headers()?)
        .query(&query.pairs())
        .send()
        .await?;
    decode(resp).await
}

pub async fn create_post(ctx: &ApiContext, input: &CreatePostInput) -> Result<Post, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/admin/blogs/posts"))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn get_post(ctx: &ApiContext, post_id: Uuid) -> Result<Post, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url(&format!("/admin/blogs/posts/{post_id}")))
        .headers(ctx.headers()?)
        .send()
        .await?;
    decode(resp).await
}

pub async fn change_post(
    ctx: &ApiContext,
    post_id: Uuid,
    input: &ChangePostInput,
) -> Result<Post, ApiError> {
    let resp = ctx
        .client
        .patch(ctx.url(&format!("/admin/blogs/posts/{post_id}")))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}
