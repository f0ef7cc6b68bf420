use crate::domain::model::ProbeReport;
use crate::utils::error::Result;

/// 把中立的結果映射轉成宿主環境的動態值表示。
/// 核心只產生 `ProbeReport`；任何綁定層都從這裡拿宿主值。
pub fn to_host_value(report: &ProbeReport) -> Result<serde_json::Value> {
    let value = serde_json::to_value(report)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_value_has_exactly_one_entry() {
        let report = ProbeReport::new();
        let value = to_host_value(&report).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("something").unwrap().as_i64().unwrap(), 0);
    }

    #[test]
    fn test_host_value_wire_form() {
        let report = ProbeReport::new();
        let value = to_host_value(&report).unwrap();

        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"something":0}"#);
    }
}
