use actix_web::{web, HttpResponse, Responder};
use common::config::FormConfig;
use log::debug;

pub async fn process(config: web::Data<FormConfig>) -> impl Responder {
    debug!("Serving form config for {}", config.dish_endpoint);
    HttpResponse::Ok().json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::config::FormConfig;

    use crate::services::form_config::configure_routes;

    #[actix_web::test]
    async fn returns_the_shared_config() {
        let config = FormConfig {
            dish_endpoint: "http://localhost:3000/dishes/".to_string(),
            reset_after_success: true,
            ..FormConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let body: FormConfig = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, config);
    }

    #[actix_web::test]
    async fn unknown_api_path_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FormConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/dishes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
