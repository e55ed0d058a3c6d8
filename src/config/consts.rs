// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://finance.naver.com/item/main.naver";
pub const DEFAULT_CODE: &str = "459580";
pub const SAMPLE_CODE: &str = "360750"; // shown in the footer as an example
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Local store
pub const STORE_FILE: &str = "stock.json";
pub const JSON_INDENT: &[u8] = b"    ";
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_TITLE: &str = "한국 주식(ETF) 데이터 현황";
pub const WINDOW_W: f32 = 650.0;
pub const WINDOW_H: f32 = 450.0;
pub const HEADING: &str = "한국 주식(ETF) 정보 현황";
pub const DESCRIPTION: &str = "이 프로그램은 한국 주식(ETF) 데이터를 실시간으로 조회하고 관리합니다.";
pub const CREDIT: &str = "made by 나종춘 (2024)";

// Table
pub const CODE_COL_WIDTH: f32 = 70.0; // six digits + padding
pub const NUMERIC_COL_WIDTH: f32 = 100.0;
pub const TEXT_COL_MIN_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_matches_heading() {
        assert_eq!(WINDOW_TITLE, "한국 주식(ETF) 데이터 현황");
        assert!(HEADING.starts_with("한국 주식(ETF)"));
    }
}
