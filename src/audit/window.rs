use super::error::{require_non_negative, require_positive, AuditError};

/// 감사 측정 기간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditWindow {
    duration_hours: f64,
    declared_volume: f64,
    unit_price: f64,
}

impl AuditWindow {
    pub fn new(
        duration_hours: f64,
        declared_volume: f64,
        unit_price: f64,
    ) -> Result<Self, AuditError> {
        Ok(Self {
            duration_hours: require_positive("duration_hours", duration_hours)?,
            declared_volume: require_non_negative("declared_volume", declared_volume)?,
            unit_price: require_non_negative("unit_price", unit_price)?,
        })
    }

    /// 아워미터 시작/종료 지시값으로 기간을 만든다. 종료값이 시작값보다 커야 한다.
    pub fn from_hour_meter(
        start_hours: f64,
        end_hours: f64,
        declared_volume: f64,
        unit_price: f64,
    ) -> Result<Self, AuditError> {
        let start = require_non_negative("hour_meter_start", start_hours)?;
        let end = require_non_negative("hour_meter_end", end_hours)?;
        if end <= start {
            return Err(AuditError::invalid("hour_meter_end", end));
        }
        Self::new(end - start, declared_volume, unit_price)
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn declared_volume(&self) -> f64 {
        self.declared_volume
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}
