/// 연료 감사 계산 중 발생 가능한 오류.
///
/// 계산은 입력이 잘못되면 거부할 뿐 보정하거나 재시도하지 않는다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuditError {
    /// 범위를 벗어난 입력값
    #[error("입력 오류: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    /// 부하 프로파일 표에 없는 라벨
    #[error("알 수 없는 부하 프로파일: {0}")]
    UnknownProfile(String),
    /// 대소문자/공백만 다른 프로파일 라벨 중복
    #[error("중복된 부하 프로파일 라벨: {0}")]
    DuplicateProfile(String),
    /// 부하율이 [0, 1]을 벗어남 (모델 적용 한계)
    #[error("부하율이 0~1 범위를 벗어났습니다: {0:.3}")]
    LoadOutOfRange(f64),
    /// 등록되지 않은 보정 프리셋 이름
    #[error("알 수 없는 보정 프리셋: {0}")]
    UnknownPreset(String),
}

impl AuditError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        AuditError::InvalidParameter { name, value }
    }
}

/// `value > 0` 이고 유한한지 확인한다.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, AuditError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AuditError::invalid(name, value))
    }
}

/// `value >= 0` 이고 유한한지 확인한다.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, AuditError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AuditError::invalid(name, value))
    }
}
