// ── Calculation output ──────────────────────────────────────────────

use converter::{Converter, PowerUnit, UnitSystem, BTU_HR_PER_KW};
use serde::{Deserialize, Serialize};

use crate::calc::transmission::Surface;
use crate::profile::Profile;

/// Non-fatal anomaly noticed while computing a breakdown.  The affected
/// gain is reported as 0 rather than subtracted from the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum LoadFlag {
    /// The chamber is warmer than the surroundings of this surface.
    NegativeDifferential { surface: Surface, delta_t: f64 },
    /// Infiltrating air carries less enthalpy than the chamber air.
    NegativeEnthalpyDifference { delta_h: f64 },
    /// The moist-air states could not be evaluated; no infiltration gain
    /// is reported.
    NonFiniteEnthalpy { ambient_temp: f64, room_temp: f64 },
}

/// Itemised heat load of one chamber.
///
/// | Field                 | Unit |
/// |-----------------------|------|
/// | every `*_load`, `*_heat`, `total_load_kw`, `rated_load_kw` | kW |
/// | sensible_heat_ratio   | 0–1  |
/// | air_qty_required      | CFM  |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBreakdown {
    pub profile: Profile,

    pub wall_load: f64,
    pub ceiling_load: f64,
    pub floor_load: f64,
    pub total_transmission_load: f64,

    pub before_freezing_load: f64,
    pub latent_heat_load: f64,
    pub after_freezing_load: f64,
    pub total_product_load: f64,

    pub air_change_load: f64,

    pub equipment_load: f64,
    pub occupancy_load: f64,
    pub light_load: f64,
    pub respiration_load: f64,
    pub door_heater_load: f64,
    pub tray_heater_load: f64,
    pub drain_heater_load: f64,
    pub peripheral_heater_load: f64,
    pub total_heater_load: f64,
    pub total_misc_load: f64,

    pub sensible_heat: f64,
    pub latent_heat: f64,
    pub sensible_heat_ratio: f64,
    pub air_qty_required: f64,

    /// Base load without safety margin.
    pub total_load_kw: f64,
    /// Base load × 1.20.
    pub rated_load_kw: f64,

    pub flags: Vec<LoadFlag>,
}

impl LoadBreakdown {
    /// Base load in BTU/hr (1 kW = 3412 BTU/hr).
    pub fn total_load_btu_hr(&self) -> f64 {
        self.total_load_kw * BTU_HR_PER_KW
    }

    /// Rated (safety-adjusted) load in BTU/hr.
    pub fn rated_load_btu_hr(&self) -> f64 {
        self.rated_load_kw * BTU_HR_PER_KW
    }

    /// Rated load expressed in `unit`.
    pub fn rated_load_in(&self, unit: PowerUnit) -> f64 {
        Converter::new(UnitSystem::metric().power(unit)).power_from_metric(self.rated_load_kw)
    }

    /// All numeric fields, labelled, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 26] {
        [
            ("wallLoad", self.wall_load),
            ("ceilingLoad", self.ceiling_load),
            ("floorLoad", self.floor_load),
            ("totalTransmissionLoad", self.total_transmission_load),
            ("beforeFreezingLoad", self.before_freezing_load),
            ("latentHeatLoad", self.latent_heat_load),
            ("afterFreezingLoad", self.after_freezing_load),
            ("totalProductLoad", self.total_product_load),
            ("airChangeLoad", self.air_change_load),
            ("equipmentLoad", self.equipment_load),
            ("occupancyLoad", self.occupancy_load),
            ("lightLoad", self.light_load),
            ("respirationLoad", self.respiration_load),
            ("doorHeaterLoad", self.door_heater_load),
            ("trayHeaterLoad", self.tray_heater_load),
            ("drainHeaterLoad", self.drain_heater_load),
            ("peripheralHeaterLoad", self.peripheral_heater_load),
            ("totalHeaterLoad", self.total_heater_load),
            ("totalMiscLoad", self.total_misc_load),
            ("sensibleHeat", self.sensible_heat),
            ("latentHeat", self.latent_heat),
            ("sensibleHeatRatio", self.sensible_heat_ratio),
            ("airQtyRequired", self.air_qty_required),
            ("totalLoadKw", self.total_load_kw),
            ("ratedLoadKw", self.rated_load_kw),
            ("totalLoadBtuHr", self.total_load_btu_hr()),
        ]
    }
}

impl std::fmt::Display for LoadBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} heat load", self.profile)?;
        writeln!(f, "  Total (with 20% safety) = {:.2} kW", self.rated_load_kw)?;
        writeln!(f, "  Base (without safety)   = {:.2} kW", self.total_load_kw)?;
        writeln!(f, "  Load                    = {:.0} BTU/hr", self.total_load_btu_hr())?;
        writeln!(f, "Transmission")?;
        writeln!(f, "  walls   = {:.3} kW", self.wall_load)?;
        writeln!(f, "  ceiling = {:.3} kW", self.ceiling_load)?;
        writeln!(f, "  floor   = {:.3} kW", self.floor_load)?;
        writeln!(f, "  total   = {:.3} kW", self.total_transmission_load)?;
        writeln!(f, "Product")?;
        writeln!(f, "  before freezing = {:.3} kW", self.before_freezing_load)?;
        writeln!(f, "  latent          = {:.3} kW", self.latent_heat_load)?;
        writeln!(f, "  after freezing  = {:.3} kW", self.after_freezing_load)?;
        writeln!(f, "  total           = {:.3} kW", self.total_product_load)?;
        writeln!(f, "Air change = {:.3} kW", self.air_change_load)?;
        writeln!(f, "Miscellaneous")?;
        writeln!(f, "  equipment   = {:.3} kW", self.equipment_load)?;
        writeln!(f, "  occupancy   = {:.3} kW", self.occupancy_load)?;
        writeln!(f, "  lighting    = {:.3} kW", self.light_load)?;
        writeln!(f, "  respiration = {:.3} kW", self.respiration_load)?;
        writeln!(f, "  heaters     = {:.3} kW", self.total_heater_load)?;
        writeln!(f, "  total       = {:.3} kW", self.total_misc_load)?;
        writeln!(f, "Sensible = {:.3} kW, latent = {:.3} kW, SHR = {:.3}",
            self.sensible_heat, self.latent_heat, self.sensible_heat_ratio)?;
        write!(f, "Air qty required = {:.0} CFM", self.air_qty_required)
    }
}
