//! Unit conversion for heat-load inputs and outputs.
//!
//! The load engine works on a single metric basis: **°C, m, kg, kW**.
//! Field data arrives in whatever the user typed (°F, ft, lb, BTU/hr, …);
//! this crate converts it to the engine basis and back for display.
//!
//! # Presets
//!
//! | Preset       | T  | L  | M  | Power   |
//! |--------------|----|----|----|---------|
//! | `metric()`   | °C | m  | kg | kW      |
//! | `imperial()` | °F | ft | lb | BTU/hr  |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, LengthUnit};
//!
//! let units = UnitSystem::metric()
//!     .temperature(TempUnit::Fahrenheit)
//!     .length(LengthUnit::Foot);
//! ```

use serde::{Deserialize, Serialize};

/// 1 kW expressed in BTU/hr, as used by the reference spreadsheets.
pub const BTU_HR_PER_KW: f64 = 3412.0;

/// 1 ton of refrigeration in kW.
pub const KW_PER_TON_REFRIGERATION: f64 = 3.516_853;

const FT_PER_M: f64 = 3.280_839_895;
const LB_PER_KG: f64 = 2.204_622_622;

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    /// Degrees Celsius (engine basis)
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit
    #[serde(rename = "F")]
    Fahrenheit,
    /// Kelvin
    #[serde(rename = "K")]
    Kelvin,
}

/// Length unit for room geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Metre (engine basis)
    #[serde(rename = "m")]
    Meter,
    /// International foot
    #[serde(rename = "ft")]
    Foot,
}

/// Mass unit for product throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    /// Kilogram (engine basis)
    #[serde(rename = "kg")]
    Kilogram,
    /// Avoirdupois pound
    #[serde(rename = "lb")]
    Pound,
}

/// Power unit for reporting loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    /// Kilowatt (engine basis)
    #[serde(rename = "kW")]
    Kilowatt,
    /// Watt
    #[serde(rename = "W")]
    Watt,
    /// BTU per hour (1 kW = 3412 BTU/hr)
    #[serde(rename = "BTU/hr")]
    BtuPerHour,
    /// Tons of refrigeration
    #[serde(rename = "TR")]
    TonRefrigeration,
}

impl std::fmt::Display for TempUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
            TempUnit::Kelvin => "K",
        })
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LengthUnit::Meter => "m",
            LengthUnit::Foot => "ft",
        })
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Pound => "lb",
        })
    }
}

impl std::fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Watt => "W",
            PowerUnit::BtuPerHour => "BTU/hr",
            PowerUnit::TonRefrigeration => "TR",
        })
    }
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — user configuration
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the user works in.
///
/// Create one with a preset (`metric()`, `imperial()`) or customise
/// individual quantities with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSystem {
    pub temperature: TempUnit,
    pub length:      LengthUnit,
    pub mass:        MassUnit,
    pub power:       PowerUnit,
}

impl UnitSystem {
    /// Start from the engine basis.  Use the builder methods to change
    /// individual quantities.
    pub fn new() -> Self { Self::metric() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Engine basis: °C, m, kg, kW.
    pub fn metric() -> Self {
        Self {
            temperature: TempUnit::Celsius,
            length:      LengthUnit::Meter,
            mass:        MassUnit::Kilogram,
            power:       PowerUnit::Kilowatt,
        }
    }

    /// US customary: °F, ft, lb, BTU/hr.
    pub fn imperial() -> Self {
        Self {
            temperature: TempUnit::Fahrenheit,
            length:      LengthUnit::Foot,
            mass:        MassUnit::Pound,
            power:       PowerUnit::BtuPerHour,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn length(mut self, u: LengthUnit) -> Self { self.length = u; self }
    pub fn mass(mut self, u: MassUnit) -> Self { self.mass = u; self }
    pub fn power(mut self, u: PowerUnit) -> Self { self.power = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::metric() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter — field units ↔ engine basis
// ────────────────────────────────────────────────────────────────────

/// Converts between a [`UnitSystem`] and the engine's metric basis.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Identity converter — input is already on the engine basis.
    pub fn identity() -> Self {
        Self { units: UnitSystem::metric() }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → °C
    pub fn t_to_metric(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
            TempUnit::Kelvin     => t - 273.15,
        }
    }

    /// °C → User
    pub fn t_from_metric(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Fahrenheit => t * 9.0 / 5.0 + 32.0,
            TempUnit::Kelvin     => t + 273.15,
        }
    }

    /// Temperature *difference* user → K.  No offset is applied.
    pub fn dt_to_metric(&self, dt: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius | TempUnit::Kelvin => dt,
            TempUnit::Fahrenheit => dt * 5.0 / 9.0,
        }
    }

    // ── Length ──────────────────────────────────────────────────────

    /// User → m
    pub fn len_to_metric(&self, l: f64) -> f64 {
        match self.units.length {
            LengthUnit::Meter => l,
            LengthUnit::Foot  => l / FT_PER_M,
        }
    }

    /// m → User
    pub fn len_from_metric(&self, l: f64) -> f64 {
        match self.units.length {
            LengthUnit::Meter => l,
            LengthUnit::Foot  => l * FT_PER_M,
        }
    }

    // ── Mass ────────────────────────────────────────────────────────

    /// User → kg
    pub fn mass_to_metric(&self, m: f64) -> f64 {
        match self.units.mass {
            MassUnit::Kilogram => m,
            MassUnit::Pound    => m / LB_PER_KG,
        }
    }

    /// kg → User
    pub fn mass_from_metric(&self, m: f64) -> f64 {
        match self.units.mass {
            MassUnit::Kilogram => m,
            MassUnit::Pound    => m * LB_PER_KG,
        }
    }

    // ── Power ───────────────────────────────────────────────────────

    /// User → kW
    pub fn power_to_metric(&self, p: f64) -> f64 {
        match self.units.power {
            PowerUnit::Kilowatt         => p,
            PowerUnit::Watt             => p / 1000.0,
            PowerUnit::BtuPerHour       => p / BTU_HR_PER_KW,
            PowerUnit::TonRefrigeration => p * KW_PER_TON_REFRIGERATION,
        }
    }

    /// kW → User
    pub fn power_from_metric(&self, p: f64) -> f64 {
        match self.units.power {
            PowerUnit::Kilowatt         => p,
            PowerUnit::Watt             => p * 1000.0,
            PowerUnit::BtuPerHour       => p * BTU_HR_PER_KW,
            PowerUnit::TonRefrigeration => p / KW_PER_TON_REFRIGERATION,
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Single-quantity helpers
// ────────────────────────────────────────────────────────────────────

/// Convert a temperature from `unit` to °C.
pub fn celsius(t: f64, unit: TempUnit) -> f64 {
    Converter::new(UnitSystem::metric().temperature(unit)).t_to_metric(t)
}

/// Convert a temperature difference from `unit` to K.
pub fn kelvin_delta(dt: f64, unit: TempUnit) -> f64 {
    Converter::new(UnitSystem::metric().temperature(unit)).dt_to_metric(dt)
}

/// Convert a length from `unit` to metres.
pub fn metres(l: f64, unit: LengthUnit) -> f64 {
    Converter::new(UnitSystem::metric().length(unit)).len_to_metric(l)
}

/// Convert a mass from `unit` to kilograms.
pub fn kilograms(m: f64, unit: MassUnit) -> f64 {
    Converter::new(UnitSystem::metric().mass(unit)).mass_to_metric(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_reference_points() {
        let c = Converter::new(UnitSystem::imperial());
        assert!((c.t_to_metric(32.0)).abs() < 1e-12);
        assert!((c.t_to_metric(212.0) - 100.0).abs() < 1e-9);
        assert!((c.t_from_metric(-40.0) + 40.0).abs() < 1e-9);
        assert!((c.dt_to_metric(18.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn kelvin_is_offset_only() {
        assert!((celsius(273.15, TempUnit::Kelvin)).abs() < 1e-12);
        assert!((kelvin_delta(5.0, TempUnit::Kelvin) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn feet_and_pounds() {
        assert!((metres(10.0, LengthUnit::Foot) - 3.048).abs() < 1e-9);
        assert!((kilograms(2.204_622_622, MassUnit::Pound) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn power_units() {
        let c = Converter::new(UnitSystem::imperial());
        assert!((c.power_from_metric(1.0) - 3412.0).abs() < 1e-9);
        assert!((c.power_to_metric(3412.0) - 1.0).abs() < 1e-12);

        let tr = Converter::new(UnitSystem::metric().power(PowerUnit::TonRefrigeration));
        assert!((tr.power_from_metric(KW_PER_TON_REFRIGERATION) - 1.0).abs() < 1e-12);

        let w = Converter::new(UnitSystem::metric().power(PowerUnit::Watt));
        assert!((w.power_to_metric(250.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn metric_is_identity() {
        let c = Converter::identity();
        assert_eq!(c.t_to_metric(-18.0), -18.0);
        assert_eq!(c.len_to_metric(4.2), 4.2);
        assert_eq!(c.mass_to_metric(1000.0), 1000.0);
        assert_eq!(c.power_from_metric(12.5), 12.5);
    }
}
