//! Token guard middleware
//!
//! Wraps every route except `/login`, `/health` and the static docs path.
//! Pulls the `token` query parameter, verifies it, and rejects the request
//! before the handler runs when it is absent or does not verify. Handlers are
//! claim-agnostic (there is a single principal class), so nothing is forwarded
//! to them on success.

use std::collections::HashMap;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{web, Error};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct TokenGuard;

impl<S, B> Transform<S, ServiceRequest> for TokenGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenGuardMiddleware { service }))
    }
}

pub struct TokenGuardMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TokenGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match token_from_query(req.uri().query()) {
            Some(token) => token,
            None => return reject(req, AppError::MissingToken),
        };

        let app_state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => return reject(req, AppError::internal("AppState not available")),
        };

        // Pure computation; the rejection reason is logged when the error is
        // rendered and never reaches the caller.
        match verify_token(&token, &app_state.security) {
            Ok(_claims) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => reject(req, err),
        }
    }
}

fn reject<B: 'static>(
    req: ServiceRequest,
    err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
    let response = err.error_response().map_into_right_body();
    Box::pin(ready(Ok(req.into_response(response))))
}

fn token_from_query(query: Option<&str>) -> Option<String> {
    let query_str = query?;
    let params = web::Query::<HashMap<String, String>>::from_query(query_str).ok()?;
    params
        .get("token")
        .cloned()
        .filter(|value| !value.is_empty())
}
