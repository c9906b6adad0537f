use serde::{Deserialize, Serialize};

use super::error::{require_non_negative, AuditError};

/// 신고량과 이론량 비교 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// 허용 범위 안
    Consistent,
    /// 신고량이 모델보다 많음 (도난/누유 가능성)
    OverconsumptionSuspected,
    /// 신고량이 모델보다 적음 (보고/센서 오류 가능성)
    UnderconsumptionAnomaly,
}

/// 편차 분석 결과. 코어는 저장하지 않고 호출자에게 돌려주기만 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuditResult {
    /// 이론 소비량 [L]
    pub theoretical_volume: f64,
    /// 신고/측정 소비량 [L]
    pub declared_volume: f64,
    /// 신고 - 이론 [L]
    pub delta_volume: f64,
    /// 이론 대비 편차 [%]. 이론량이 0이면 0.
    pub delta_percent: f64,
    /// 편차 × 단가
    pub financial_impact: f64,
    pub verdict: Verdict,
}

impl AuditResult {
    /// 이론량이 0이라 편차율이 의미 없는 경우.
    pub fn is_degenerate(&self) -> bool {
        self.theoretical_volume == 0.0
    }

    /// 신고량 0은 "아직 데이터 없음"으로 본다. 화면에서는 판정 대신 안내를 띄운다.
    pub fn has_declared_volume(&self) -> bool {
        self.declared_volume > 0.0
    }
}

/// 이론량과 신고량을 비교해 허용 오차 기준으로 판정한다.
///
/// 허용 밴드 경계값은 `Consistent`로 본다 (초과해야 이상 판정).
pub fn classify(
    theoretical_volume: f64,
    declared_volume: f64,
    unit_price: f64,
    tolerance_percent: f64,
) -> Result<AuditResult, AuditError> {
    let theoretical_volume = require_non_negative("theoretical_volume", theoretical_volume)?;
    let declared_volume = require_non_negative("declared_volume", declared_volume)?;
    let unit_price = require_non_negative("unit_price", unit_price)?;
    let tolerance_percent = require_non_negative("tolerance_percent", tolerance_percent)?;

    let delta_volume = declared_volume - theoretical_volume;
    let delta_percent = if theoretical_volume > 0.0 {
        delta_volume / theoretical_volume * 100.0
    } else {
        0.0
    };
    let band = theoretical_volume * tolerance_percent / 100.0;

    let verdict = if delta_volume > band {
        Verdict::OverconsumptionSuspected
    } else if delta_volume < -band {
        Verdict::UnderconsumptionAnomaly
    } else {
        Verdict::Consistent
    };

    Ok(AuditResult {
        theoretical_volume,
        declared_volume,
        delta_volume,
        delta_percent,
        financial_impact: delta_volume * unit_price,
        verdict,
    })
}
