//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정(레지스트리 초기화, 인프라 연결)을 터미널에 단계별로 보여줍니다.
//! 요청 처리 중의 로그는 `log` 매크로를 사용하고, 이 모듈은 기동 시점에만 사용합니다.

/// 박스 내부 폭
const BOX_WIDTH: usize = 50;

/// 박스 형태의 제목을 출력합니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║         🔄 INITIALIZING SERVICE REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{}║", center(title, BOX_WIDTH - 1));
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 요약을 출력합니다.
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

/// 레지스트리 이름 캐시 구성 결과를 출력합니다.
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Registry: {} entries loaded", cache_type, count);
}

/// 인프라 컴포넌트(데이터베이스, 거리 계산 API) 준비 완료를 출력합니다.
///
/// ```text
///    ├─ MongoDB: food_delivery_dev ✓
/// ```
pub fn print_infrastructure_ready(component: &str, detail: &str) {
    println!("   ├─ {}: {} ✓", component, detail);
}

/// 문자 수 기준으로 가운데 정렬합니다.
fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_both_sides() {
        let centered = center("ab", 6);
        assert_eq!(centered, "  ab  ");
    }

    #[test]
    fn test_center_keeps_long_text() {
        let centered = center("registry", 4);
        assert_eq!(centered, "registry");
    }
}
