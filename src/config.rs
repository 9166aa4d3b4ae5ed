// ── Default input tables and site overrides ─────────────────────────
//
// Each chamber type ships a complete input snapshot that the UI starts
// from.  Site-wide design conditions can be overridden through the
// environment (or a `.env` file):
//
//   COLDLOAD_AMBIENT_TEMP   ambient design temperature, °C
//   COLDLOAD_AMBIENT_RH     ambient relative humidity, %
//   COLDLOAD_USAGE_FACTOR   door-traffic multiplier on air changes

use converter::{LengthUnit, MassUnit, TempUnit};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Once;

use crate::error::*;
use crate::inputs::*;
use crate::profile::{Profile, DEFAULT_BATCH_HOURS};

pub const ENV_AMBIENT_TEMP: &str = "COLDLOAD_AMBIENT_TEMP";
pub const ENV_AMBIENT_RH: &str = "COLDLOAD_AMBIENT_RH";
pub const ENV_USAGE_FACTOR: &str = "COLDLOAD_USAGE_FACTOR";

/// Design ambient used when nothing else is known, °C.
pub const DEFAULT_AMBIENT_TEMP: f64 = 35.0;
/// Design ambient relative humidity, %.
pub const DEFAULT_AMBIENT_RH: f64 = 60.0;

/// A full input snapshot for one chamber type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub room: RoomData,
    pub product: ProductData,
    pub misc: MiscData,
}

impl Defaults {
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::ColdRoom => Self {
                room: room(5.0, 4.0, 3.0, 100.0),
                product: ProductData {
                    product_name: None,
                    mass: 1000.0,
                    mass_unit: MassUnit::Kilogram,
                    entering_temp: 30.0,
                    final_temp: 4.0,
                    freezing_point: 0.0,
                    cp_above_freezing: 3.5,
                    cp_below_freezing: 1.8,
                    latent_heat_of_fusion: 335.0,
                    respiration_heat: 0.0,
                    temp_unit: TempUnit::Celsius,
                },
                misc: MiscData {
                    room_temp: 2.0,
                    light_power: 200.0,
                    fan_motor_rating: 0.25,
                    equipment_usage_hours: 20.0,
                    ..misc()
                },
            },
            Profile::Freezer => Self {
                room: room(5.0, 4.0, 3.0, 150.0),
                product: ProductData {
                    product_name: None,
                    mass: 3000.0,
                    mass_unit: MassUnit::Kilogram,
                    entering_temp: 25.0,
                    final_temp: -15.0,
                    freezing_point: -0.8,
                    cp_above_freezing: 3.5,
                    cp_below_freezing: 1.8,
                    latent_heat_of_fusion: 233.0,
                    respiration_heat: 0.0,
                    temp_unit: TempUnit::Celsius,
                },
                misc: MiscData {
                    room_temp: -15.0,
                    light_power: 200.0,
                    fan_motor_rating: 0.25,
                    equipment_usage_hours: 20.0,
                    heaters: Heaters { door: 100.0, ..Heaters::default() },
                    heater_hours: 24.0,
                    ..misc()
                },
            },
            Profile::BlastFreezer => Self {
                room: room(4.0, 3.0, 3.0, 150.0),
                product: ProductData {
                    product_name: None,
                    mass: 2000.0,
                    mass_unit: MassUnit::Kilogram,
                    entering_temp: -5.0,
                    final_temp: -30.0,
                    freezing_point: 0.0,
                    cp_above_freezing: 3.5,
                    cp_below_freezing: 1.8,
                    latent_heat_of_fusion: 233.0,
                    respiration_heat: 0.0,
                    temp_unit: TempUnit::Celsius,
                },
                misc: MiscData {
                    room_temp: -35.0,
                    light_power: 100.0,
                    light_hours: 5.0,
                    fan_motor_rating: 1.5,
                    equipment_usage_hours: DEFAULT_BATCH_HOURS,
                    batch_hours: Some(DEFAULT_BATCH_HOURS),
                    ..misc()
                },
            },
        }
    }

    /// Apply overrides from the process environment, after loading a
    /// `.env` file if one is found.
    pub fn with_env(self) -> Result<Self> {
        load_dotenv();
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key → value lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(t) = parse(&lookup, ENV_AMBIENT_TEMP)? {
            self.misc.ambient_temp = t;
        }
        if let Some(rh) = parse(&lookup, ENV_AMBIENT_RH)? {
            if !(rh > 0.0 && rh <= 100.0) {
                return Err(LoadError::invalid(ENV_AMBIENT_RH, format!("{rh} is outside (0, 100] %")));
            }
            self.misc.ambient_rh = rh;
        }
        if let Some(f) = parse(&lookup, ENV_USAGE_FACTOR)? {
            if f <= 0.0 {
                return Err(LoadError::invalid(ENV_USAGE_FACTOR, format!("must be > 0, got {f}")));
            }
            self.misc.usage_factor = f;
        }
        Ok(self)
    }
}

fn parse<F>(lookup: &F, key: &'static str) -> Result<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else { return Ok(None) };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| LoadError::invalid(key, format!("`{raw}` is not a number")))?;
    if !value.is_finite() {
        return Err(LoadError::invalid(key, "value is not finite"));
    }
    debug!("{key} override = {value}");
    Ok(Some(value))
}

fn room(length: f64, width: f64, height: f64, insulation_mm: f64) -> RoomData {
    RoomData {
        length,
        width,
        height,
        length_unit: LengthUnit::Meter,
        wall_insulation_thickness: insulation_mm,
        ceiling_insulation_thickness: insulation_mm,
        floor_insulation_thickness: insulation_mm,
        insulation_type: Insulation::Puf,
        position: RoomPosition::Inside,
    }
}

fn misc() -> MiscData {
    MiscData {
        ambient_temp: DEFAULT_AMBIENT_TEMP,
        room_temp: 2.0,
        temp_unit: TempUnit::Celsius,
        ambient_rh: DEFAULT_AMBIENT_RH,
        occupancy_count: 1,
        occupancy_hours: 5.0,
        light_power: 200.0,
        light_hours: 5.0,
        fan_motor_rating: 0.25,
        equipment_usage_hours: 20.0,
        heaters: Heaters::default(),
        heater_hours: 0.0,
        air_change_rate: None,
        usage_factor: 1.0,
        batch_hours: None,
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() { return; }
        if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let p = std::path::PathBuf::from(dir).join(".env");
            if p.exists() { let _ = dotenvy::from_path(&p); }
        }
    });
}
