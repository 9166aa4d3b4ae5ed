//! Category totals, sensible/latent split and the rated load.
//!
//! Every calculator hands over kJ accumulated over the profile's
//! reference period.  This is the single place where those energies are
//! turned into kW.

use converter::BTU_HR_PER_KW;
use log::debug;

use super::air_change::AirChangeLoad;
use super::misc::MiscLoad;
use super::product::ProductLoad;
use super::transmission::TransmissionLoad;
use crate::breakdown::LoadBreakdown;
use crate::profile::{Profile, ReferencePeriod};

/// Fixed safety margin applied to the base load.
pub const SAFETY_FACTOR: f64 = 1.20;

/// Sensible heat of standard air, BTU/hr per CFM per °F.
pub const SENSIBLE_AIR_FACTOR: f64 = 1.08;

/// Air temperature change across the evaporator coil, °F.
pub const COIL_AIR_TEMP_RISE_F: f64 = 10.0;

/// Required evaporator airflow (CFM) for a sensible load in kW.
pub fn air_quantity_cfm(sensible_kw: f64) -> f64 {
    finite_or_zero(sensible_kw * BTU_HR_PER_KW / (SENSIBLE_AIR_FACTOR * COIL_AIR_TEMP_RISE_F))
}

/// `sensible / (sensible + latent)`, or 0 when there is no load at all.
pub fn sensible_heat_ratio(sensible: f64, latent: f64) -> f64 {
    let total = sensible + latent;
    if total <= 0.0 {
        return 0.0;
    }
    finite_or_zero(sensible / total).clamp(0.0, 1.0)
}

pub fn aggregate(
    profile: Profile,
    period: ReferencePeriod,
    transmission: &TransmissionLoad,
    product: &ProductLoad,
    air_change: &AirChangeLoad,
    misc: &MiscLoad,
) -> LoadBreakdown {
    let kw = |kj: f64| finite_or_zero(period.kw(kj));

    let wall_load = kw(transmission.wall);
    let ceiling_load = kw(transmission.ceiling);
    let floor_load = kw(transmission.floor);
    let total_transmission_load = wall_load + ceiling_load + floor_load;

    let before_freezing_load = kw(product.before_freezing);
    let latent_heat_load = kw(product.latent);
    let after_freezing_load = kw(product.after_freezing);
    let total_product_load = before_freezing_load + latent_heat_load + after_freezing_load;

    let air_change_load = kw(air_change.load);

    let equipment_load = kw(misc.equipment);
    let occupancy_load = kw(misc.occupancy);
    let light_load = kw(misc.lighting);
    let respiration_load = kw(misc.respiration);
    let door_heater_load = kw(misc.heaters.door);
    let tray_heater_load = kw(misc.heaters.tray);
    let drain_heater_load = kw(misc.heaters.drain);
    let peripheral_heater_load = kw(misc.heaters.peripheral);
    let total_heater_load =
        door_heater_load + tray_heater_load + drain_heater_load + peripheral_heater_load;
    let total_misc_load =
        equipment_load + occupancy_load + light_load + respiration_load + total_heater_load;

    let total_load_kw =
        total_transmission_load + total_product_load + air_change_load + total_misc_load;

    let latent_heat = latent_heat_load;
    let sensible_heat = (total_load_kw - latent_heat).max(0.0);

    debug!(
        "{profile}: transmission {total_transmission_load:.3} kW, product {total_product_load:.3} kW, \
         air change {air_change_load:.3} kW, misc {total_misc_load:.3} kW"
    );

    let mut flags = transmission.flags.clone();
    flags.extend(air_change.flags.iter().cloned());

    LoadBreakdown {
        profile,
        wall_load,
        ceiling_load,
        floor_load,
        total_transmission_load,
        before_freezing_load,
        latent_heat_load,
        after_freezing_load,
        total_product_load,
        air_change_load,
        equipment_load,
        occupancy_load,
        light_load,
        respiration_load,
        door_heater_load,
        tray_heater_load,
        drain_heater_load,
        peripheral_heater_load,
        total_heater_load,
        total_misc_load,
        sensible_heat,
        latent_heat,
        sensible_heat_ratio: sensible_heat_ratio(sensible_heat, latent_heat),
        air_qty_required: air_quantity_cfm(sensible_heat),
        total_load_kw,
        rated_load_kw: total_load_kw * SAFETY_FACTOR,
        flags,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
