use crate::models::{AccessToken, CreateUserAccessTokenWithPassword, User};

use super::{ApiContext, ApiError, decode};

/// Exchange email/password for a bearer token.
pub async fn access_token_with_password(
    ctx: &ApiContext,
    input: &CreateUserAccessTokenWithPassword,
) -> Result<AccessToken, ApiError> {
    let resp = ctx
        .client
        .post(ctx.url("/accounts/users/access-tokens/passwords"))
        .headers(ctx.headers()?)
        .json(input)
        .send()
        .await?;
    decode(resp).await
}

pub async fn user_profile(ctx: &ApiContext) -> Result<User, ApiError> {
    let resp = ctx
        .client
        .get(ctx.url("/accounts/users/profile"))
        .headers(ctx.headers()?)
        .send()
        .await?;
    decode(resp).await
}
