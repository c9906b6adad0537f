//! 감사 결과를 사람이 읽는 텍스트 보고서로 만든다. 계산은 하지 않는다.

use std::fmt;

use crate::audit::{AuditOutcome, EquipmentClass, Verdict};
use crate::i18n::{keys, Translator};

/// 판정에 해당하는 표시 문구.
pub fn verdict_label<'a>(tr: &'a Translator, verdict: Verdict) -> &'a str {
    match verdict {
        Verdict::Consistent => tr.t(keys::VERDICT_CONSISTENT),
        Verdict::OverconsumptionSuspected => tr.t(keys::VERDICT_OVERCONSUMPTION),
        Verdict::UnderconsumptionAnomaly => tr.t(keys::VERDICT_UNDERCONSUMPTION),
    }
}

pub fn class_label<'a>(tr: &'a Translator, class: EquipmentClass) -> &'a str {
    match class {
        EquipmentClass::StationaryGenerator => tr.t(keys::CLASS_GENERATOR),
        EquipmentClass::MobileEngine => tr.t(keys::CLASS_MOBILE),
    }
}

/// 여러 줄의 텍스트 보고서를 만든다.
///
/// 신고량이 0이면 판정 대신 안내 문구를 넣는다.
pub fn render(outcome: &AuditOutcome, tr: &Translator, site: Option<&str>) -> String {
    Report { outcome, tr, site }.to_string()
}

/// 감사 결과 한 건의 보고서. `Display`로 출력한다.
pub struct Report<'a> {
    pub outcome: &'a AuditOutcome,
    pub tr: &'a Translator,
    pub site: Option<&'a str>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tr = self.tr;
        let outcome = self.outcome;
        let r = &outcome.result;
        writeln!(f, "{}", tr.t(keys::REPORT_TITLE))?;
        if let Some(site) = self.site.filter(|s| !s.trim().is_empty()) {
            writeln!(f, "{}: {}", tr.t(keys::REPORT_SITE), site.trim())?;
        }
        writeln!(
            f,
            "{}: {}",
            tr.t(keys::REPORT_EQUIPMENT),
            class_label(tr, outcome.class)
        )?;
        writeln!(
            f,
            "{}: {:.1} kW",
            tr.t(keys::REPORT_RATED_POWER),
            outcome.rated_power_kw
        )?;
        writeln!(
            f,
            "{}: {:.0}%",
            tr.t(keys::REPORT_LOAD),
            outcome.estimate.load_fraction * 100.0
        )?;
        writeln!(
            f,
            "{}: {:.2} L/h",
            tr.t(keys::REPORT_RATE),
            outcome.estimate.hourly_rate_l_per_h
        )?;
        writeln!(
            f,
            "{}: {:.1} L | {}: {:.1} L",
            tr.t(keys::REPORT_DECLARED),
            r.declared_volume,
            tr.t(keys::REPORT_THEORETICAL),
            r.theoretical_volume
        )?;

        if !r.has_declared_volume() {
            return writeln!(f, "{}", tr.t(keys::INFO_NO_DECLARED_VOLUME));
        }

        if r.is_degenerate() {
            writeln!(f, "{}: {:+.1} L", tr.t(keys::REPORT_DELTA), r.delta_volume)?;
            writeln!(f, "{}", tr.t(keys::INFO_DEGENERATE))?;
        } else {
            writeln!(
                f,
                "{}: {:+.1} L ({:+.1}%)",
                tr.t(keys::REPORT_DELTA),
                r.delta_volume,
                r.delta_percent
            )?;
        }
        writeln!(f, "{}: {:.0}", tr.t(keys::REPORT_IMPACT), r.financial_impact)?;
        writeln!(
            f,
            "{}: ±{}%",
            tr.t(keys::REPORT_TOLERANCE),
            outcome.calibration.tolerance_percent
        )?;
        writeln!(
            f,
            "{}: {}",
            tr.t(keys::REPORT_VERDICT),
            verdict_label(tr, r.verdict)
        )
    }
}
