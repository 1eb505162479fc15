use serde::Deserialize;

/// `GET /restaurant/nearby/{user_id}?time=M` 쿼리
///
/// `time`은 분 단위 배달 가능 시간입니다. 소요 시간이 `time * 60`초 미만인
/// 레스토랑만 결과에 포함됩니다.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RestaurantsWithinQuery {
    pub time: u32,
}

impl RestaurantsWithinQuery {
    pub fn threshold_secs(&self) -> u64 {
        u64::from(self.time) * 60
    }
}
