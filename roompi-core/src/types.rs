//! Core types for the RoomPi config service

use serde::{Deserialize, Serialize};

/// A named bundle of sensor thresholds and polling-timer values.
///
/// Thresholds come in critical/warning pairs per sensor. The five FSM timer
/// fields are polling intervals in milliseconds for the external measurement
/// process; only the "Default" profile defines them, and they are omitted
/// from serialized output when absent so consumers fall back to their own
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Temperature critical low boundary (degrees C)
    pub temp_crit_low: f64,
    /// Temperature critical high boundary (degrees C)
    pub temp_crit_high: f64,
    /// Temperature warning low boundary (degrees C)
    pub temp_warn_low: f64,
    /// Temperature warning high boundary (degrees C)
    pub temp_warn_high: f64,
    /// Relative humidity critical low boundary (%)
    pub rh_crit_low: f64,
    /// Relative humidity critical high boundary (%)
    pub rh_crit_high: f64,
    /// Relative humidity warning low boundary (%)
    pub rh_warn_low: f64,
    /// Relative humidity warning high boundary (%)
    pub rh_warn_high: f64,
    /// Illuminance critical boundary (lux)
    pub lux_crit: u32,
    /// Illuminance warning boundary (lux)
    pub lux_warn: u32,
    /// eCO2 critical boundary (ppm)
    pub eco2_crit: u32,
    /// eCO2 warning boundary (ppm)
    pub eco2_warn: u32,
    /// MeasurementCtrl FSM polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meas_t_ms: Option<u64>,
    /// DHT11 FSM polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dht11_t_ms: Option<u64>,
    /// BH1750 FSM polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bh1750_t_ms: Option<u64>,
    /// CCS811 FSM polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccs811_t_ms: Option<u64>,
    /// Output FSM polling interval (ms)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_t_ms: Option<u64>,
}

impl Profile {
    /// Whether this profile carries its own FSM timer values.
    pub fn has_timers(&self) -> bool {
        self.meas_t_ms.is_some()
            || self.dht11_t_ms.is_some()
            || self.bh1750_t_ms.is_some()
            || self.ccs811_t_ms.is_some()
            || self.output_t_ms.is_some()
    }
}
