use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

/// Adiciona `X-Content-Type-Options` e `X-Frame-Options` em toda resposta
pub struct SecurityHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware { service }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            let headers = res.headers_mut();

            // Browser não tenta adivinhar o content-type do JSON
            headers.insert(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            );

            // API só devolve JSON, nunca é embutida em iframe; sem OAuth popup aqui
            headers.insert(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            );

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api, config::AppConfig, store::UserStore};
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_headers_on_success_and_error_responses() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserStore::seeded()))
                .wrap(SecurityHeaders)
                .configure(api::configure(AppConfig::default())),
        )
        .await;

        for uri in ["/health", "/api/users/9999", "/nope"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            let headers = resp.headers();
            assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff", "{}", uri);
            assert_eq!(headers.get("x-frame-options").unwrap(), "DENY", "{}", uri);
        }
    }
}
