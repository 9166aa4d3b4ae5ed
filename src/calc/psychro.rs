//! Moist-air state used by the air-change calculation.
//!
//! Saturation pressure follows the Magnus/Tetens form, over water at or
//! above 0 °C and over ice below it.  Enthalpy is per kg of dry air.

/// Standard atmosphere, kPa.
pub const ATMOSPHERIC_PRESSURE_KPA: f64 = 101.325;

/// Relative humidity assumed inside every chamber, %.
pub const CHAMBER_RH: f64 = 90.0;

/// Lowest air temperature the Magnus/Tetens fit is used for, °C.
pub const MIN_AIR_TEMP: f64 = -100.0;
/// Air temperatures must stay below the boiling point, °C.
pub const MAX_AIR_TEMP: f64 = 100.0;

const R_DRY_AIR: f64 = 0.287_042; // kJ/(kg·K)

/// Psychrometric state of an air stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    /// Dry-bulb temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub relative_humidity: f64,
    /// Humidity ratio (kg water / kg dry air)
    pub humidity_ratio: f64,
    /// Enthalpy (kJ/kg dry air)
    pub enthalpy: f64,
    /// Specific volume (m³/kg dry air)
    pub specific_volume: f64,
}

impl AirState {
    pub fn new(temperature: f64, relative_humidity: f64) -> Self {
        let w = humidity_ratio(temperature, relative_humidity);
        Self {
            temperature,
            relative_humidity,
            humidity_ratio: w,
            enthalpy: enthalpy(temperature, w),
            specific_volume: specific_volume(temperature, w),
        }
    }
}

/// Saturation vapour pressure, kPa.
pub fn saturation_pressure_kpa(t: f64) -> f64 {
    if t >= 0.0 {
        0.61078 * (17.27 * t / (t + 237.3)).exp()
    } else {
        0.61078 * (21.875 * t / (t + 265.5)).exp()
    }
}

/// Humidity ratio from dry bulb (°C) and relative humidity (%).
pub fn humidity_ratio(t: f64, rh: f64) -> f64 {
    let phi = (rh / 100.0).clamp(0.0, 1.0);
    let pv = phi * saturation_pressure_kpa(t);
    0.622 * pv / (ATMOSPHERIC_PRESSURE_KPA - pv)
}

/// Moist-air enthalpy, kJ/kg dry air.
pub fn enthalpy(t: f64, w: f64) -> f64 {
    1.006 * t + w * (2501.0 + 1.86 * t)
}

/// Moist-air specific volume, m³/kg dry air.
pub fn specific_volume(t: f64, w: f64) -> f64 {
    R_DRY_AIR * (t + 273.15) * (1.0 + 1.607_858 * w) / ATMOSPHERIC_PRESSURE_KPA
}
