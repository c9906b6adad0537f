/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Power,
    Volume,
    SpecificConsumption,
}

impl QuantityKind {
    /// CLI 등에서 쓰는 이름(power/volume/sfc)으로부터 종류를 찾는다.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "power" | "p" => Some(QuantityKind::Power),
            "volume" | "v" => Some(QuantityKind::Volume),
            "sfc" | "specific_consumption" | "specific-consumption" => {
                Some(QuantityKind::SpecificConsumption)
            }
            _ => None,
        }
    }
}
