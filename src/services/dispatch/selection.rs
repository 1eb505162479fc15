//! 소요 시간 기반 후보 선택
//!
//! 외부 API 호출은 후보 목록당 한 번이며, 응답의 i번째 소요 시간은 i번째 후보와 짝지어집니다.
//! 소요 시간을 키로 하는 맵을 쓰지 않으므로 같은 소요 시간의 후보가 서로를 덮어쓰지 않습니다.

use crate::core::errors::{AppError, AppResult};
use crate::distance::DistanceOracle;
use crate::domain::dto::restaurants::request::RestaurantsWithinQuery;
use crate::domain::entities::{Entity, Order, Restaurant, Rider, User};

/// 소요 시간이 가장 짧은 라이더
///
/// 동률이면 ID가 가장 작은 라이더를 고릅니다.
pub fn pick_nearest(riders: Vec<Rider>, durations: Vec<u64>) -> Option<Rider> {
    durations
        .into_iter()
        .zip(riders)
        .min_by_key(|(duration, rider)| (*duration, rider.id().map(|id| id.bytes())))
        .map(|(_, rider)| rider)
}

/// 소요 시간이 `threshold_secs` 미만인 레스토랑 (입력 순서 유지)
pub fn filter_within(restaurants: Vec<Restaurant>, durations: Vec<u64>, threshold_secs: u64) -> Vec<Restaurant> {
    restaurants
        .into_iter()
        .zip(durations)
        .filter(|(_, duration)| *duration < threshold_secs)
        .map(|(restaurant, _)| restaurant)
        .collect()
}

/// `origin`(레스토랑 주소)에서 가장 가까운 라이더
///
/// 라이더가 없으면 API를 호출하지 않고 `None`을 반환합니다.
/// 위치가 없는 라이더도 후보에 포함되며 빈 목적지로 전송됩니다.
pub async fn nearest_rider<O>(oracle: &O, origin: &str, riders: Vec<Rider>) -> AppResult<Option<Rider>>
where
    O: DistanceOracle + ?Sized,
{
    if riders.is_empty() {
        return Ok(None);
    }

    let destinations: Vec<String> = riders.iter().map(Rider::destination).collect();
    let durations = oracle.travel_durations(origin, &destinations).await?;

    Ok(pick_nearest(riders, durations))
}

/// `origin`(고객 주소)에서 `threshold_secs` 안에 도착하는 레스토랑
pub async fn restaurants_within<O>(
    oracle: &O,
    origin: &str,
    restaurants: Vec<Restaurant>,
    threshold_secs: u64,
) -> AppResult<Vec<Restaurant>>
where
    O: DistanceOracle + ?Sized,
{
    if restaurants.is_empty() {
        return Ok(Vec::new());
    }

    let destinations: Vec<String> = restaurants.iter().map(|r| r.address.clone()).collect();
    let durations = oracle.travel_durations(origin, &destinations).await?;

    Ok(filter_within(restaurants, durations, threshold_secs))
}

/// 주문 레스토랑에서 가장 가까운 라이더를 배정하고 `Ready`로 전환합니다.
///
/// 레스토랑이 없거나 라이더가 한 명도 없으면 `NotFound`이며 주문은 바뀌지 않습니다.
pub async fn assign_nearest<O>(
    oracle: &O,
    order: &mut Order,
    restaurant: Option<&Restaurant>,
    riders: Vec<Rider>,
) -> AppResult<Rider>
where
    O: DistanceOracle + ?Sized,
{
    let restaurant = restaurant
        .ok_or_else(|| AppError::NotFound("주문한 레스토랑을 찾을 수 없습니다".to_string()))?;

    let rider = nearest_rider(oracle, &restaurant.address, riders)
        .await?
        .ok_or_else(|| AppError::NotFound("배정 가능한 라이더가 없습니다".to_string()))?;
    let rider_id = rider.id()
        .ok_or_else(|| AppError::InternalError("저장된 라이더에 ID가 없습니다".to_string()))?;

    order.assign_rider(rider_id);
    Ok(rider)
}

/// 고객 주소에서 `query.time`분 안에 도착하는 레스토랑
///
/// 고객이 없거나 결과가 비면 `NotFound`입니다.
pub async fn deliverable_restaurants<O>(
    oracle: &O,
    user: Option<&User>,
    restaurants: Vec<Restaurant>,
    query: RestaurantsWithinQuery,
) -> AppResult<Vec<Restaurant>>
where
    O: DistanceOracle + ?Sized,
{
    let user = user.ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

    let within = restaurants_within(oracle, &user.address, restaurants, query.threshold_secs()).await?;
    if within.is_empty() {
        return Err(AppError::NotFound(format!("{}분 안에 배달 가능한 레스토랑이 없습니다", query.time)));
    }

    Ok(within)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use crate::domain::entities::Location;

    /// 고정된 소요 시간을 돌려주고 호출 인자를 기록하는 oracle
    struct FixedOracle {
        durations: Vec<u64>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FixedOracle {
        fn new(durations: Vec<u64>) -> Self {
            Self { durations, calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DistanceOracle for FixedOracle {
        async fn travel_durations(&self, origin: &str, destinations: &[String]) -> AppResult<Vec<u64>> {
            self.calls.lock().unwrap().push((origin.to_string(), destinations.to_vec()));
            Ok(self.durations.clone())
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl DistanceOracle for FailingOracle {
        async fn travel_durations(&self, _origin: &str, _destinations: &[String]) -> AppResult<Vec<u64>> {
            Err(AppError::ExternalServiceError("connection refused".to_string()))
        }
    }

    fn rider(name: &str, lat: f64) -> Rider {
        let mut rider = Rider::new(name.to_string(), "hash".to_string(), true, Some(Location::new(lat, 127.0)));
        rider.set_id(ObjectId::new());
        rider
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::new(name.to_string(), "hash".to_string(), vec![], format!("{} street", name))
    }

    #[actix_web::test]
    async fn test_nearest_rider_picks_minimum_duration() {
        let riders = vec![rider("a", 37.1), rider("b", 37.2), rider("c", 37.3)];
        let oracle = FixedOracle::new(vec![300, 150, 450]);

        let nearest = nearest_rider(&oracle, "Seoul Jongno-gu", riders).await.unwrap().unwrap();

        assert_eq!(nearest.username, "b");
        let calls = oracle.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Seoul Jongno-gu");
        assert_eq!(calls[0].1, vec!["37.1,127", "37.2,127", "37.3,127"]);
    }

    #[actix_web::test]
    async fn test_nearest_rider_without_riders_skips_oracle() {
        let oracle = FixedOracle::new(vec![]);

        let nearest = nearest_rider(&oracle, "Seoul", vec![]).await.unwrap();

        assert!(nearest.is_none());
        assert!(oracle.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_rider_without_location_sent_as_empty_destination() {
        let mut idle = rider("idle", 0.0);
        idle.cur_loc = None;
        let oracle = FixedOracle::new(vec![200, 100]);

        let nearest = nearest_rider(&oracle, "Seoul", vec![rider("a", 37.1), idle]).await.unwrap().unwrap();

        assert_eq!(nearest.username, "idle");
        assert_eq!(oracle.calls()[0].1[1], "");
    }

    #[actix_web::test]
    async fn test_oracle_failure_propagates() {
        let result = nearest_rider(&FailingOracle, "Seoul", vec![rider("a", 37.1)]).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[test]
    fn test_tied_riders_resolve_to_smallest_id() {
        let mut first = rider("first", 37.1);
        let mut second = rider("second", 37.2);
        let low = ObjectId::parse_str("000000000000000000000001").unwrap();
        let high = ObjectId::parse_str("000000000000000000000002").unwrap();
        first.set_id(high);
        second.set_id(low);

        let nearest = pick_nearest(vec![first, second], vec![120, 120]).unwrap();
        assert_eq!(nearest.username, "second");
    }

    #[test]
    fn test_pick_nearest_matches_minimum_for_distinct_durations() {
        let durations = vec![900, 42, 77, 1300, 43];
        let riders: Vec<Rider> = (0..durations.len()).map(|i| rider(&format!("r{}", i), 37.0)).collect();

        let nearest = pick_nearest(riders, durations).unwrap();
        assert_eq!(nearest.username, "r1");
    }

    #[actix_web::test]
    async fn test_restaurants_within_uses_strict_threshold() {
        let restaurants = vec![restaurant("near"), restaurant("edge"), restaurant("far")];
        let oracle = FixedOracle::new(vec![500, 600, 700]);

        let within = restaurants_within(&oracle, "Seoul Mapo-gu", restaurants, 10 * 60).await.unwrap();

        let names: Vec<&str> = within.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["near"]);
        assert_eq!(oracle.calls()[0].1, vec!["near street", "edge street", "far street"]);
    }

    #[test]
    fn test_filter_within_keeps_equal_durations() {
        let restaurants = vec![restaurant("a"), restaurant("b"), restaurant("c")];

        let within = filter_within(restaurants, vec![300, 300, 900], 600);

        let names: Vec<&str> = within.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[actix_web::test]
    async fn test_restaurants_within_without_restaurants_skips_oracle() {
        let oracle = FixedOracle::new(vec![]);

        let within = restaurants_within(&oracle, "Seoul", vec![], 600).await.unwrap();

        assert!(within.is_empty());
        assert!(oracle.calls().is_empty());
    }

    fn accepted_order(restaurant: &Restaurant) -> Order {
        let mut order = Order::new(restaurant.id.unwrap_or_else(ObjectId::new), ObjectId::new(), None, vec![ObjectId::new()]);
        order.accept(5.0);
        order
    }

    #[actix_web::test]
    async fn test_assign_nearest_marks_order_ready() {
        let origin = restaurant("hansik");
        let mut order = accepted_order(&origin);
        let riders = vec![rider("a", 37.1), rider("b", 37.2)];
        let expected = riders[1].id;
        let oracle = FixedOracle::new(vec![400, 120]);

        let assigned = assign_nearest(&oracle, &mut order, Some(&origin), riders).await.unwrap();

        assert_eq!(assigned.username, "b");
        assert_eq!(order.rider, expected);
        assert_eq!(order.status.as_deref(), Some("Ready"));
        assert_eq!(oracle.calls()[0].0, "hansik street");
    }

    #[actix_web::test]
    async fn test_assign_without_riders_is_not_found() {
        let origin = restaurant("hansik");
        let mut order = accepted_order(&origin);
        let oracle = FixedOracle::new(vec![]);

        let result = assign_nearest(&oracle, &mut order, Some(&origin), vec![]).await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("라이더")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert!(order.rider.is_none());
        assert_eq!(order.status.as_deref(), Some("Accepted"));
        assert!(oracle.calls().is_empty());
    }

    #[actix_web::test]
    async fn test_assign_with_missing_restaurant_is_not_found() {
        let mut order = accepted_order(&restaurant("gone"));
        let oracle = FixedOracle::new(vec![100]);

        let result = assign_nearest(&oracle, &mut order, None, vec![rider("a", 37.1)]).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(order.rider.is_none());
        assert!(oracle.calls().is_empty());
    }

    fn customer() -> User {
        User::new("minji".to_string(), "Seoul Mapo-gu".to_string(), "hash".to_string())
    }

    #[actix_web::test]
    async fn test_deliverable_restaurants_uses_customer_address() {
        let user = customer();
        let oracle = FixedOracle::new(vec![900, 300]);

        let within = deliverable_restaurants(
            &oracle,
            Some(&user),
            vec![restaurant("far"), restaurant("near")],
            RestaurantsWithinQuery { time: 10 },
        )
        .await
        .unwrap();

        let names: Vec<&str> = within.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["near"]);
        assert_eq!(oracle.calls()[0].0, "Seoul Mapo-gu");
    }

    #[actix_web::test]
    async fn test_no_deliverable_restaurants_is_not_found() {
        let user = customer();
        let oracle = FixedOracle::new(vec![900, 1200]);

        let result = deliverable_restaurants(
            &oracle,
            Some(&user),
            vec![restaurant("a"), restaurant("b")],
            RestaurantsWithinQuery { time: 10 },
        )
        .await;

        match result {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("10분")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_deliverable_restaurants_for_missing_user_is_not_found() {
        let oracle = FixedOracle::new(vec![100]);

        let result = deliverable_restaurants(&oracle, None, vec![restaurant("a")], RestaurantsWithinQuery { time: 10 }).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(oracle.calls().is_empty());
    }
}
