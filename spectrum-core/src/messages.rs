use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body returned by the upload endpoint: number of frames in the analysed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    pub n: i64,
}

/// Body sent to the update-table endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateTableRequest {
    pub index: i64,
}

impl UpdateTableRequest {
    pub fn to_json(&self) -> String {
        // A struct with a single integer field cannot fail to serialise.
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"index\":{}}}", self.index))
    }
}

/// The eight signal characteristics shown in the results table, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableField {
    CentralFrequency,
    Bandwidth,
    NoiseLevel,
    Modulation,
    Amplitude,
    SpectralPeaks,
    Snr,
    CrestFactor,
}

impl TableField {
    pub const ALL: [TableField; 8] = [
        TableField::CentralFrequency,
        TableField::Bandwidth,
        TableField::NoiseLevel,
        TableField::Modulation,
        TableField::Amplitude,
        TableField::SpectralPeaks,
        TableField::Snr,
        TableField::CrestFactor,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::CentralFrequency => "central_frequency",
            Self::Bandwidth => "bandwidth",
            Self::NoiseLevel => "noise_level",
            Self::Modulation => "modulation",
            Self::Amplitude => "amplitude",
            Self::SpectralPeaks => "spectral_peaks",
            Self::Snr => "snr",
            Self::CrestFactor => "crest_factor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CentralFrequency => "Central frequency",
            Self::Bandwidth => "Bandwidth",
            Self::NoiseLevel => "Noise level",
            Self::Modulation => "Modulation",
            Self::Amplitude => "Amplitude",
            Self::SpectralPeaks => "Spectral peaks",
            Self::Snr => "SNR",
            Self::CrestFactor => "Crest factor",
        }
    }

    fn ordinal(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Position of this field's value cell among the table's `td` elements
    /// (row-major, label/value pairs, two pairs per row).
    pub fn cell_position(self) -> usize {
        self.ordinal() * 2 + 1
    }

    /// Position of the label cell immediately left of the value cell.
    pub fn label_position(self) -> usize {
        self.ordinal() * 2
    }
}

/// A key that is present maps to `Some`, `null` included. Only absent keys stay `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Body returned by the update-table endpoint. Fields the server omits stay `None`;
/// an explicit `null` is kept as `Some(Value::Null)` and clears its cell.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TableUpdate {
    #[serde(default, deserialize_with = "present")]
    pub central_frequency: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub bandwidth: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub noise_level: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub modulation: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub amplitude: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub spectral_peaks: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub snr: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub crest_factor: Option<Value>,
}

impl TableUpdate {
    pub fn get(&self, field: TableField) -> Option<&Value> {
        let v = match field {
            TableField::CentralFrequency => &self.central_frequency,
            TableField::Bandwidth => &self.bandwidth,
            TableField::NoiseLevel => &self.noise_level,
            TableField::Modulation => &self.modulation,
            TableField::Amplitude => &self.amplitude,
            TableField::SpectralPeaks => &self.spectral_peaks,
            TableField::Snr => &self.snr,
            TableField::CrestFactor => &self.crest_factor,
        };
        v.as_ref()
    }

    /// `(cell position, text)` for every field present in the response, in table order.
    pub fn cell_writes(&self) -> Vec<(usize, String)> {
        TableField::ALL
            .iter()
            .filter_map(|&field| {
                let value = self.get(field)?;
                Some((field.cell_position(), display_text(value)))
            })
            .collect()
    }
}

pub fn parse_upload_result(body: &str) -> Result<UploadResult, String> {
    serde_json::from_str(body).map_err(|e| format!("upload response: {e}"))
}

pub fn parse_table_update(body: &str) -> Result<TableUpdate, String> {
    serde_json::from_str(body).map_err(|e| format!("update_table response: {e}"))
}

/// Text a JSON value shows when written into an element as text content.
/// Mirrors how the browser stringifies the value (`String(v)`), with `null` as empty.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                number_text(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let abs = x.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{x:e}");
        // JS writes positive exponents with an explicit sign: 1e+21
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    // shortest round-trip digits; integral values print without a fraction
    format!("{x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_positions_are_odd_and_ordered() {
        let positions: Vec<usize> = TableField::ALL.iter().map(|f| f.cell_position()).collect();
        assert_eq!(positions, vec![1, 3, 5, 7, 9, 11, 13, 15]);
        assert_eq!(TableField::Snr.label_position(), 12);
    }

    #[test]
    fn test_request_body_is_integer_index() {
        let body = UpdateTableRequest { index: 10 }.to_json();
        assert_eq!(body, r#"{"index":10}"#);
    }

    #[test]
    fn test_parse_upload_result() {
        assert_eq!(parse_upload_result(r#"{"n": 50}"#).unwrap(), UploadResult { n: 50 });
        assert!(parse_upload_result(r#"{"frames": 50}"#).is_err());
        assert!(parse_upload_result("<html>Internal Server Error</html>").is_err());
        assert!(parse_upload_result("").is_err());
    }

    #[test]
    fn test_table_update_ignores_unknown_keys() {
        let update = parse_table_update(r#"{"snr": 12.5, "extra": true}"#).unwrap();
        assert_eq!(update.cell_writes(), vec![(13, "12.5".to_string())]);
    }

    #[test]
    fn test_null_field_is_present() {
        let update = parse_table_update(r#"{"snr": null}"#).unwrap();
        assert_eq!(update.snr, Some(Value::Null));
        assert_eq!(update.bandwidth, None);
        assert_eq!(update.cell_writes(), vec![(13, String::new())]);
    }

    #[test]
    fn test_full_table_update_writes_in_order() {
        let update = parse_table_update(
            r#"{
                "central_frequency": 2400000000.0,
                "bandwidth": 20000000,
                "noise_level": -97.25,
                "modulation": "PPM",
                "amplitude": -31.5,
                "spectral_peaks": "2400000000.0, 2410000000.0",
                "snr": 65.75,
                "crest_factor": -9.2295
            }"#,
        )
        .unwrap();
        let writes = update.cell_writes();
        assert_eq!(
            writes,
            vec![
                (1, "2400000000".to_string()),
                (3, "20000000".to_string()),
                (5, "-97.25".to_string()),
                (7, "PPM".to_string()),
                (9, "-31.5".to_string()),
                (11, "2400000000.0, 2410000000.0".to_string()),
                (13, "65.75".to_string()),
                (15, "-9.2295".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_text_matches_browser_stringification() {
        assert_eq!(display_text(&json!(null)), "");
        assert_eq!(display_text(&json!(true)), "true");
        assert_eq!(display_text(&json!(2.0)), "2");
        assert_eq!(display_text(&json!(-0.0)), "0");
        assert_eq!(display_text(&json!(0.1)), "0.1");
        assert_eq!(display_text(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(display_text(&json!(1e21)), "1e+21");
        assert_eq!(display_text(&json!(1.2345678901234568e20)), "123456789012345680000");
        assert_eq!(display_text(&json!(9007199254740993.0)), "9007199254740992");
        assert_eq!(display_text(&json!([1, null, "a"])), "1,,a");
        assert_eq!(display_text(&json!({"a": 1})), "[object Object]");
    }
}
