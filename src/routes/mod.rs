//! # Route Table
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | 실행 상태 |
//! | GET | `/health` | 헬스 체크 |
//! | PUT | `/user` | 고객 등록 |
//! | GET | `/user/{id}` | 고객 조회 |
//! | PUT | `/food-item` | 메뉴 항목 추가 |
//! | GET | `/food-item/{id}` | 메뉴 항목 조회 |
//! | PUT | `/rider` | 라이더 등록 |
//! | GET | `/rider/{id}` | 라이더 조회 |
//! | PUT | `/rider/location/{id}` | 라이더 위치 갱신 |
//! | PUT | `/restaurant` | 레스토랑 등록 |
//! | GET | `/restaurant/{id}` | 레스토랑 조회 (메뉴 포함) |
//! | GET | `/restaurant/nearby/{user_id}?time=M` | 배달 가능 레스토랑 |
//! | PUT | `/order` | 주문 접수 |
//! | GET | `/order/{id}` | 주문 조회 |
//! | GET | `/order/assign/{id}` | 라이더 배정 |
//! | GET | `/order/user/{user_id}` | 고객별 주문 이력 |
//! | GET | `/order/rider/{rider_id}` | 라이더별 주문 이력 |

use actix_web::web;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.service(handlers::status::root_status);
    cfg.service(handlers::status::health_check);

    configure_user_routes(cfg);
    configure_rider_routes(cfg);
    configure_food_item_routes(cfg);
    configure_restaurant_routes(cfg);
    configure_order_routes(cfg);
}

/// 본문/쿼리 파싱 실패도 `{"error": ...}` 형식의 400으로 응답합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::register_user)
            .service(handlers::users::get_user)
    );
}

fn configure_rider_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rider")
            .service(handlers::riders::register_rider)
            .service(handlers::riders::update_rider_location)
            .service(handlers::riders::get_rider)
    );
}

fn configure_food_item_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/food-item")
            .service(handlers::food_items::add_food_item)
            .service(handlers::food_items::get_food_item)
    );
}

fn configure_restaurant_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/restaurant")
            .service(handlers::restaurants::register_restaurant)
            .service(handlers::restaurants::restaurants_within)
            .service(handlers::restaurants::get_restaurant)
    );
}

fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/order")
            .service(handlers::orders::place_order)
            .service(handlers::orders::assign_rider)
            .service(handlers::orders::orders_by_user)
            .service(handlers::orders::orders_by_rider)
            .service(handlers::orders::get_order)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_root_reports_running() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "running");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "food_delivery_backend");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_json_400() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::put()
            .uri("/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_invalid_body_rejected_before_service_lookup() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::put()
            .uri("/food-item")
            .set_json(serde_json::json!({ "name": "Kimbap", "price": -1.0, "qty": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
