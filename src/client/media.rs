use actix_web::web::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::models::{ImageQuery, ImageResponse};

use super::{ApiContext, ApiError, decode};

pub async fn list_images(
    ctx: &ApiContext,
    query: &ImageQuery,
) -> Result<Vec<ImageResponse>, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/admin/media/images"))
        .headers(ctx.headers()?)
        .query(&query.pairs())
        .send()
        .await?;
    decode(resp).await
}

/// Forwards a multipart upload verbatim: the incoming body and its boundary
/// carrying content type go straight through without re-encoding.
pub async fn upload_image(
    ctx: &ApiContext,
    content_type: &str,
    body: Bytes,
) -> Result<ImageResponse, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/admin/media/images"))
        .headers(ctx.headers()?)
        .header(CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await?;
    decode(resp).await
}
