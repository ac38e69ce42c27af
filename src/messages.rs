//! 콘솔 화면에 표시하는 문구.
//!
//! `{name}` 형태의 자리표시자는 [`fill`]로 채운다.

pub const ERROR_PREFIX: &str = "오류";
pub const APP_EXIT: &str = "프로그램을 종료합니다.";
pub const INPUT_DEFAULT_HINT: &str = " [엔터={default}]";

pub const MAIN_MENU: [&str; 8] = [
    "\n=== LED 효율 계산기 ===",
    "1) 사용 조건",
    "2) 조명기구 입력",
    "3) 투자 회수 설정",
    "4) 계산",
    "5) 입력 초기화",
    "6) 설정",
    "0) 종료",
];
pub const PROMPT_MENU_SELECT: &str = "메뉴 선택: ";
pub const INVALID_SELECTION_RETRY: &str = "잘못된 입력입니다. 다시 선택하세요.";

pub const USAGE_HEADING: &str = "\n-- 사용 조건 --";
pub const PROMPT_USAGE_HOURS: &str = "하루 사용 시간 [h]";
pub const PROMPT_USAGE_DAYS: &str = "연간 사용 일수 [일]";
pub const PROMPT_ENERGY_RATE: &str = "전력 단가 [{symbol}/kWh]";

pub const FITTINGS_HEADING: &str = "\n-- 조명기구 입력 --";
pub const PROMPT_FITTING_COUNT: &str = "조명기구 종류 수";
pub const FITTINGS_EXISTING_HEADING: &str = "[기존 조명기구 {n}]";
pub const FITTINGS_REPLACEMENT_HEADING: &str = "[교체 조명기구 {n}]";
pub const PROMPT_FITTING_NAME: &str = "제품명: ";
pub const PROMPT_FITTING_QUANTITY: &str = "수량";
pub const PROMPT_FITTING_WATTAGE: &str = "기구당 소비전력 [W]";
pub const FITTINGS_ENTERED: &str = "조명기구 {n}종을 입력했습니다.";
pub const FITTING_COUNT_RANGE: &str = "조명기구 종류 수는 {max} 이하로 입력하세요.";

pub const PAYBACK_HEADING: &str = "\n-- 투자 회수 설정 --";
pub const PROMPT_PAYBACK_ENABLE: &str = "투자 회수 계산을 사용합니까? (y/n): ";
pub const PROMPT_PURCHASE_COST: &str = "구매비 [{symbol}]";
pub const PROMPT_INSTALL_COST: &str = "설치비 [{symbol}]";
pub const PROMPT_PAYBACK_YEARS: &str = "분석 기간 [년]";
pub const PROMPT_RATE_INCREASE: &str = "연간 요금 인상률 [%]";
pub const PAYBACK_DISABLED: &str = "투자 회수 계산을 사용하지 않습니다.";

pub const RESET_DONE: &str = "입력한 조명기구와 투자 회수 설정을 초기화했습니다.";
pub const CALC_NO_FITTINGS: &str = "먼저 조명기구를 입력하세요.";

pub const SETTINGS_HEADING: &str = "\n-- 설정 --";
pub const SETTINGS_OPTIONS: &str = "1) 램프 상수  2) 통화 기호";
pub const PROMPT_RATED_LIFE: &str = "램프 정격 수명 [h]";
pub const PROMPT_LAMP_COST: &str = "램프 단가 [{symbol}]";
pub const PROMPT_LABOUR_COST: &str = "교체 인건비 [{symbol}]";
pub const PROMPT_CO2_FACTOR: &str = "탄소 배출 계수 [kgCO2/kWh]";
pub const PROMPT_CURRENCY_SYMBOL: &str = "통화 기호: ";
pub const SETTINGS_SAVED: &str = "설정을 저장했습니다.";

pub const REPORT_HEADING: &str = "\n=== 결과 ===";
pub const REPORT_EXISTING: &str = "[기존 조명기구]";
pub const REPORT_REPLACEMENT: &str = "[교체 조명기구]";
pub const REPORT_COL_NAME: &str = "제품명";
pub const REPORT_COL_QUANTITY: &str = "수량";
pub const REPORT_COL_WATTAGE: &str = "W";
pub const REPORT_COL_KWH: &str = "연간 kWh";
pub const REPORT_COL_COST: &str = "연간 전기요금";
pub const REPORT_COL_CO2: &str = "연간 CO2 [t]";
pub const REPORT_COL_RELAMP: &str = "연간 교체비";
pub const REPORT_TOTAL: &str = "합계";
pub const REPORT_KWH_REDUCTION: &str = "연간 전력량 절감: {value} kWh";
pub const REPORT_BILL_REDUCTION: &str = "연간 전기요금 절감: {value}";
pub const REPORT_CO2_REDUCTION: &str = "연간 CO2 절감: {value} t";
pub const REPORT_PAYBACK_HEADING: &str = "\n[투자 회수]";
pub const REPORT_INVESTMENT: &str = "초기 투자비: {value}";
pub const REPORT_COL_YEAR: &str = "연도";
pub const REPORT_COL_CUM_EXISTING: &str = "기존 누적";
pub const REPORT_COL_CUM_REPLACEMENT: &str = "교체 누적";
pub const REPORT_COL_DIFFERENCE: &str = "차액";
pub const REPORT_BREAK_EVEN_YEAR: &str = "손익분기: {value}년";
pub const REPORT_BREAK_EVEN_NO_PRIOR: &str = "손익분기: 첫 해부터 회수되어 보간할 수 없습니다.";
pub const REPORT_BREAK_EVEN_NONE: &str = "손익분기: 분석 기간 내 회수되지 않습니다.";
pub const REPORT_SIMPLE_PAYBACK: &str = "단순 회수기간: {value}년";
pub const REPORT_SIMPLE_PAYBACK_NONE: &str = "단순 회수기간: 연간 절감액이 없습니다.";

pub const ERROR_INVALID_NUMBER: &str = "숫자를 입력하세요.";

/// `{key}` 형태의 자리표시자를 값으로 치환한다.
pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}
