use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol layer of the cellular stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Layer {
    Phy,
    Mac,
    Rlc,
    Pdcp,
    Rrc,
    Nas,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Phy => "PHY",
            Layer::Mac => "MAC",
            Layer::Rlc => "RLC",
            Layer::Pdcp => "PDCP",
            Layer::Rrc => "RRC",
            Layer::Nas => "NAS",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurement or configuration value of a layer parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Layer-scoped measurement or configuration parameter.
///
/// # Examples
/// ```
/// use gppcheck_core::model::{Layer, LayerParameter, ParamValue};
///
/// let rsrp = LayerParameter::new(Layer::Phy, -85, "(-156, -31)", "TS 38.215 5.1.1")
///     .with_unit("dBm")
///     .with_resolution(1.0);
/// assert_eq!(rsrp.value, ParamValue::Number(-85.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerParameter {
    pub value: ParamValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<f64>,
    pub reference: String,
    pub layer: Layer,
}

impl LayerParameter {
    pub fn new(
        layer: Layer,
        value: impl Into<ParamValue>,
        range: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            unit: None,
            range: range.into(),
            resolution: None,
            reference: reference.into(),
            layer,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_uses_uppercase_wire_names() {
        let value = serde_json::to_value(Layer::Pdcp).expect("encode");
        assert_eq!(value, "PDCP");
        let layer: Layer = serde_json::from_str("\"NAS\"").expect("decode");
        assert_eq!(layer, Layer::Nas);
    }

    #[test]
    fn parameter_omits_optional_fields_when_none() {
        let param = LayerParameter::new(Layer::Nas, 7, "0..7", "TS 24.501 9.11.3.32");
        let value = serde_json::to_value(&param).expect("encode");
        assert!(value.get("unit").is_none());
        assert!(value.get("resolution").is_none());
        assert_eq!(value["layer"], "NAS");
    }
}
