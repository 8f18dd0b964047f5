use actix_web::body::{self, BoxBody, MessageBody};
use actix_web::{
    Error, HttpResponse, ResponseError,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use colored::Colorize;
use futures::future::{LocalBoxFuture, Ready, ready};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

pub struct LoggerMiddleware {
    enabled: bool,
}

impl LoggerMiddleware {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
    <B as MessageBody>::Error: ResponseError,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = LoggerMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddlewareService {
            service: Arc::new(service),
            enabled: self.enabled,
        }))
    }
}

pub struct LoggerMiddlewareService<S> {
    service: Arc<S>,
    enabled: bool,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
    <B as MessageBody>::Error: ResponseError,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Arc::clone(&self.service);

        if !self.enabled {
            return Box::pin(async move { srv.call(req).await.map(|res| res.map_into_boxed_body()) });
        }

        let method = req.method().to_string();
        let path = req.path().to_string();
        let query_string = req.query_string().to_string();
        let started = Instant::now();

        Box::pin(async move {
            let res = srv.call(req).await?;

            let status = res.status();
            let status_code = status.as_u16();
            let elapsed_ms = started.elapsed().as_millis();

            let colored_status = match status_code {
                200..=299 => status_code.to_string().green(),
                300..=399 => status_code.to_string().yellow(),
                400..=499 => status_code.to_string().bright_red(),
                _ => status_code.to_string().red(),
            };

            let colored_method = match method.as_str() {
                "GET" => method.blue(),
                "POST" => method.yellow(),
                "PUT" => method.purple(),
                "DELETE" => method.red(),
                _ => method.normal(),
            };

            let target = if query_string.is_empty() {
                path
            } else {
                format!("{path}?{query_string}")
            };

            info!(
                "[{}] {} {} {}",
                colored_status,
                colored_method,
                target.bright_white(),
                format!("({elapsed_ms}ms)").bright_black(),
            );

            if status_code < 400 {
                return Ok(res.map_into_boxed_body());
            }

            // Copy the error body for the debug log and rebuild the response
            let (req, res) = res.into_parts();
            let headers = res.headers().clone();
            let response_body_bytes = body::to_bytes(res.into_body()).await?;
            let response_body =
                serde_json::from_slice::<Value>(&response_body_bytes).unwrap_or(Value::Null);

            debug!(
                "  Response: {}",
                serde_json::to_string(&response_body)
                    .unwrap_or_default()
                    .bright_yellow()
            );

            let mut new_res = HttpResponse::build(status);
            for (key, value) in headers.iter() {
                new_res.insert_header((key.clone(), value.clone()));
            }
            let new_res = new_res.body(response_body_bytes);
            Ok(ServiceResponse::new(req, new_res))
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};

    use super::*;

    async fn teapot() -> HttpResponse {
        HttpResponse::build(StatusCode::IM_A_TEAPOT)
            .json(serde_json::json!({ "success": false, "error": "short and stout" }))
    }

    async fn hello() -> HttpResponse {
        HttpResponse::Ok().body("hello")
    }

    #[actix_web::test]
    async fn error_bodies_survive_logging() {
        let app = test::init_service(
            App::new()
                .wrap(LoggerMiddleware::new(true))
                .route("/teapot", web::get().to(teapot)),
        )
        .await;

        let req = test::TestRequest::get().uri("/teapot?brew=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "short and stout");
    }

    #[actix_web::test]
    async fn disabled_logger_passes_responses_through() {
        let app = test::init_service(
            App::new()
                .wrap(LoggerMiddleware::new(false))
                .route("/", web::get().to(hello)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "hello");
    }
}
