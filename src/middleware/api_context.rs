use actix_web::error::ErrorInternalServerError;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use futures::future::{Ready, ready};

use crate::AppState;
use crate::client::ApiContext;

/// Builds the per-request client configuration from the `{subdomain}` path
/// segment and the session cookies. A request without a session cookie
/// still gets a context; the upstream rejects it with 401 and the route
/// layer redirects to login.
impl FromRequest for ApiContext {
    type Error = Error;
    type Future = Ready<Result<ApiContext, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(ErrorInternalServerError("app state not configured")));
        };

        let token = req.cookie("sessionid").map(|c| c.value().to_string());
        let api_key = req.cookie("sessionkey").map(|c| c.value().to_string());

        let forwarded_host = match &state.config.test_tenant_host {
            Some(host) => Some(host.clone()),
            None => req
                .match_info()
                .get("subdomain")
                .map(|subdomain| format!("{}.{}", subdomain, state.config.tenant_domain)),
        };

        ready(Ok(ApiContext {
            client: state.http_client.clone(),
            base_url: state.config.api_endpoint.clone(),
            token,
            api_key,
            forwarded_host,
        }))
    }
}
