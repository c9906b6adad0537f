//! 디젤 엔진 연료 감사 엔진.
//!
//! 명판 출력과 운전 모드로 이론 소비량을 추정하고([`estimate_consumption`]),
//! 신고량과 비교해 판정한다([`classify_variance`]). 모든 함수는 상태가 없고
//! 입력만으로 결과가 정해진다.

pub mod equipment;
pub mod error;
pub mod estimator;
pub mod operating_mode;
pub mod presets;
pub mod variance;
pub mod window;

pub use equipment::{EquipmentClass, EquipmentProfile};
pub use error::AuditError;
pub use estimator::{estimate, Calibration, ConsumptionInput, ConsumptionResult};
pub use operating_mode::{
    raw_load_fraction, resolve_load, LoadContext, LoadPolicy, OperatingMode, ProfileTable,
    DEFAULT_FRICTION_MARGIN,
};
pub use variance::{classify, AuditResult, Verdict};
pub use window::AuditWindow;

/// 부하율 계산 방식 설정.
#[derive(Debug, Clone, Copy)]
pub struct LoadSettings<'a> {
    pub profiles: &'a ProfileTable,
    pub friction_margin: f64,
    pub policy: LoadPolicy,
}

/// 운전 모드를 거쳐 계산한 이론 소비량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionEstimate {
    /// 정리된 부하율 (0~1)
    pub load_fraction: f64,
    pub hourly_rate_l_per_h: f64,
    pub theoretical_volume_l: f64,
}

/// 장비/운전 모드/기간으로부터 이론 소비량을 계산한다.
pub fn estimate_consumption(
    profile: &EquipmentProfile,
    mode: &OperatingMode,
    window: &AuditWindow,
    calibration: &Calibration,
    load: &LoadSettings<'_>,
) -> Result<ConsumptionEstimate, AuditError> {
    let ctx = LoadContext {
        rated_power_kw: profile.rated_power_kw(),
        profiles: load.profiles,
        friction_margin: load.friction_margin,
        policy: load.policy,
    };
    let load_fraction = resolve_load(mode, &ctx)?;
    let result = estimate(ConsumptionInput::with_calibration(
        profile.rated_power_kw(),
        load_fraction,
        window.duration_hours(),
        calibration,
    ))?;
    log::debug!(
        "{} {:.1} kW: load {load_fraction:.3}, {:.2} L/h, {:.1} L over {} h",
        profile.class().key(),
        profile.rated_power_kw(),
        result.hourly_rate_l_per_h,
        result.theoretical_volume_l,
        window.duration_hours()
    );
    Ok(ConsumptionEstimate {
        load_fraction,
        hourly_rate_l_per_h: result.hourly_rate_l_per_h,
        theoretical_volume_l: result.theoretical_volume_l,
    })
}

/// 이론량/신고량/단가/허용오차로 편차와 판정을 계산한다.
pub fn classify_variance(
    theoretical_volume: f64,
    declared_volume: f64,
    unit_price: f64,
    tolerance_percent: f64,
) -> Result<AuditResult, AuditError> {
    classify(
        theoretical_volume,
        declared_volume,
        unit_price,
        tolerance_percent,
    )
}

/// 한 번의 감사에 필요한 입력 전체.
#[derive(Debug, Clone)]
pub struct AuditRequest<'a> {
    pub profile: EquipmentProfile,
    pub mode: OperatingMode,
    pub window: AuditWindow,
    pub calibration: Calibration,
    pub load: LoadSettings<'a>,
}

/// 감사 결과와 계산 근거.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditOutcome {
    pub class: EquipmentClass,
    pub rated_power_kw: f64,
    pub calibration: Calibration,
    pub estimate: ConsumptionEstimate,
    pub result: AuditResult,
}

/// 추정과 판정을 차례로 수행한다.
pub fn run_audit(request: &AuditRequest<'_>) -> Result<AuditOutcome, AuditError> {
    request.calibration.validate()?;
    let estimate = estimate_consumption(
        &request.profile,
        &request.mode,
        &request.window,
        &request.calibration,
        &request.load,
    )?;
    let result = classify_variance(
        estimate.theoretical_volume_l,
        request.window.declared_volume(),
        request.window.unit_price(),
        request.calibration.tolerance_percent,
    )?;
    log::debug!(
        "verdict {:?}: delta {:+.1} L ({:+.1}%)",
        result.verdict,
        result.delta_volume,
        result.delta_percent
    );
    Ok(AuditOutcome {
        class: request.profile.class(),
        rated_power_kw: request.profile.rated_power_kw(),
        calibration: request.calibration,
        estimate,
        result,
    })
}
