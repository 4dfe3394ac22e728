//! Rendering of the flat `roompi.conf` output file
//!
//! The measurement process reads exactly [`CONF_FIELDS.len()`] lines in a
//! fixed order, one `Label = value` pair per line. Submitted values are
//! written through verbatim; a field missing from the submission is written
//! as [`MISSING_FIELD_VALUE`].

use std::collections::HashMap;

/// One line of the output file: human-readable label and the form key it is
/// populated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfField {
    /// Label written to the file
    pub label: &'static str,
    /// Key looked up in the submitted form fields
    pub key: &'static str,
}

/// Placeholder written for a field absent from the submission.
///
/// The measurement process parses values with `atof`/`atoi`, so this literal
/// reads as 0 downstream. Changing it would change downstream behavior.
pub const MISSING_FIELD_VALUE: &str = "None";

/// The full field layout of `roompi.conf`, in file order.
pub const CONF_FIELDS: [ConfField; 18] = [
    ConfField { label: "Profile", key: "profile" },
    ConfField { label: "Temp Critical Low", key: "temp_crit_low" },
    ConfField { label: "Temp Critical High", key: "temp_crit_high" },
    ConfField { label: "Temp Warning Low", key: "temp_warn_low" },
    ConfField { label: "Temp Warning High", key: "temp_warn_high" },
    ConfField { label: "RH Critical Low", key: "rh_crit_low" },
    ConfField { label: "RH Critical High", key: "rh_crit_high" },
    ConfField { label: "RH Warning Low", key: "rh_warn_low" },
    ConfField { label: "RH Warning High", key: "rh_warn_high" },
    ConfField { label: "Lux Critical", key: "lux_crit" },
    ConfField { label: "Lux Warning", key: "lux_warn" },
    ConfField { label: "eCO2 Critical", key: "eco2_crit" },
    ConfField { label: "eCO2 Warning", key: "eco2_warn" },
    ConfField { label: "FSM MeasurementCtrl Timer", key: "meas_t_ms" },
    ConfField { label: "FSM DHT11 Timer", key: "dht11_t_ms" },
    ConfField { label: "FSM BH1750 Timer", key: "bh1750_t_ms" },
    ConfField { label: "FSM CCS811 Timer", key: "ccs811_t_ms" },
    ConfField { label: "FSM Output Timer", key: "output_t_ms" },
];

/// Render submitted form fields into the full file contents.
///
/// Produces one line per entry of [`CONF_FIELDS`] regardless of which keys
/// are present in `fields`. No validation: values go through unchanged.
pub fn render(fields: &HashMap<String, String>) -> String {
    let mut out = String::new();
    for field in &CONF_FIELDS {
        let value = fields
            .get(field.key)
            .map(String::as_str)
            .unwrap_or(MISSING_FIELD_VALUE);
        out.push_str(field.label);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
