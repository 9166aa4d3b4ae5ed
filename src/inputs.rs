// ── Input snapshots ─────────────────────────────────────────────────
//
// The calling UI assembles one `RoomData`, `ProductData` and `MiscData`
// per calculation request.  Unit tags travel with the values; the engine
// only accepts the metric basis, so callers run `to_metric()` first.

use converter::{LengthUnit, MassUnit, TempUnit};
use serde::{Deserialize, Serialize};

use crate::calc::psychro::{MAX_AIR_TEMP, MIN_AIR_TEMP};
use crate::error::*;

/// Absolute zero, °C.
pub const ABSOLUTE_ZERO: f64 = -273.15;

// ── Insulation ──────────────────────────────────────────────────────

/// Panel insulation material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Insulation {
    /// Polyurethane foam, 40 kg/m³ density class
    #[serde(rename = "PUF")]
    Puf,
    /// Polyisocyanurate
    #[serde(rename = "PIR")]
    Pir,
    /// Extruded polystyrene
    #[serde(rename = "XPS")]
    Xps,
    /// Expanded polystyrene
    #[serde(rename = "EPS")]
    Eps,
    /// Mineral / rock wool
    #[serde(rename = "MW")]
    MineralWool,
}

impl Insulation {
    /// Thermal conductivity k in W/(m·K).
    pub fn conductivity(self) -> f64 {
        match self {
            Insulation::Puf => 0.023,
            Insulation::Pir => 0.022,
            Insulation::Xps => 0.029,
            Insulation::Eps => 0.036,
            Insulation::MineralWool => 0.040,
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Insulation::Puf => "PUF (40 kg/m³)",
            Insulation::Pir => "PIR",
            Insulation::Xps => "XPS",
            Insulation::Eps => "EPS",
            Insulation::MineralWool => "Mineral wool",
        })
    }
}

/// Where the chamber sits.  An outside chamber has its walls and roof
/// facing the sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomPosition {
    #[default]
    Inside,
    Outside,
}

// ── Room ────────────────────────────────────────────────────────────

/// Chamber geometry and envelope.
///
/// | Field                        | Unit          |
/// |------------------------------|---------------|
/// | length / width / height      | `length_unit` |
/// | *_insulation_thickness       | mm            |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomData {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub length_unit: LengthUnit,
    pub wall_insulation_thickness: f64,
    pub ceiling_insulation_thickness: f64,
    pub floor_insulation_thickness: f64,
    pub insulation_type: Insulation,
    #[serde(default)]
    pub position: RoomPosition,
}

impl RoomData {
    /// Internal volume in `length_unit`³.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Total area of the four walls.
    pub fn wall_area(&self) -> f64 {
        2.0 * (self.length + self.width) * self.height
    }

    pub fn ceiling_area(&self) -> f64 {
        self.length * self.width
    }

    pub fn floor_area(&self) -> f64 {
        self.length * self.width
    }

    /// Copy with the geometry expressed in metres.
    pub fn to_metric(&self) -> RoomData {
        RoomData {
            length: converter::metres(self.length, self.length_unit),
            width: converter::metres(self.width, self.length_unit),
            height: converter::metres(self.height, self.length_unit),
            length_unit: LengthUnit::Meter,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.length_unit != LengthUnit::Meter {
            return Err(LoadError::units("room.lengthUnit", self.length_unit, LengthUnit::Meter));
        }
        positive("room.length", self.length)?;
        positive("room.width", self.width)?;
        positive("room.height", self.height)?;
        positive("room.wallInsulationThickness", self.wall_insulation_thickness)?;
        positive("room.ceilingInsulationThickness", self.ceiling_insulation_thickness)?;
        positive("room.floorInsulationThickness", self.floor_insulation_thickness)?;
        Ok(())
    }
}

// ── Product ─────────────────────────────────────────────────────────

/// Product throughput and thermal properties.
///
/// Specific heats are always kJ/(kg·K) and latent heat kJ/kg, whatever
/// `mass_unit` the throughput is entered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    #[serde(default)]
    pub product_name: Option<String>,
    /// Mass per cycle (per day, or per batch for batch profiles).
    pub mass: f64,
    pub mass_unit: MassUnit,
    pub entering_temp: f64,
    pub final_temp: f64,
    pub freezing_point: f64,
    pub cp_above_freezing: f64,
    pub cp_below_freezing: f64,
    pub latent_heat_of_fusion: f64,
    /// Respiration heat of fresh produce, W/kg.
    #[serde(default)]
    pub respiration_heat: f64,
    pub temp_unit: TempUnit,
}

impl ProductData {
    /// Copy with mass in kg and temperatures in °C.
    pub fn to_metric(&self) -> ProductData {
        let t = |v| converter::celsius(v, self.temp_unit);
        ProductData {
            mass: converter::kilograms(self.mass, self.mass_unit),
            mass_unit: MassUnit::Kilogram,
            entering_temp: t(self.entering_temp),
            final_temp: t(self.final_temp),
            freezing_point: t(self.freezing_point),
            temp_unit: TempUnit::Celsius,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.mass_unit != MassUnit::Kilogram {
            return Err(LoadError::units("product.massUnit", self.mass_unit, MassUnit::Kilogram));
        }
        if self.temp_unit != TempUnit::Celsius {
            return Err(LoadError::units("product.tempUnit", self.temp_unit, TempUnit::Celsius));
        }
        non_negative("product.mass", self.mass)?;
        temperature("product.enteringTemp", self.entering_temp)?;
        temperature("product.finalTemp", self.final_temp)?;
        temperature("product.freezingPoint", self.freezing_point)?;
        positive("product.cpAboveFreezing", self.cp_above_freezing)?;
        positive("product.cpBelowFreezing", self.cp_below_freezing)?;
        non_negative("product.latentHeatOfFusion", self.latent_heat_of_fusion)?;
        non_negative("product.respirationHeat", self.respiration_heat)?;
        if self.final_temp > self.entering_temp {
            return Err(LoadError::invalid(
                "product.finalTemp",
                format!(
                    "final temperature {} is above entering temperature {}",
                    self.final_temp, self.entering_temp
                ),
            ));
        }
        Ok(())
    }
}

// ── Miscellaneous ───────────────────────────────────────────────────

/// Electric heater ratings, W.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heaters {
    pub door: f64,
    pub tray: f64,
    pub drain: f64,
    pub peripheral: f64,
}

impl Heaters {
    pub fn total(&self) -> f64 {
        self.door + self.tray + self.drain + self.peripheral
    }
}

/// Operating conditions and internal gains.
///
/// | Field               | Unit      |
/// |---------------------|-----------|
/// | temperatures        | `temp_unit` |
/// | ambient_rh          | %         |
/// | light_power         | W         |
/// | fan_motor_rating    | kW        |
/// | heaters             | W         |
/// | *_hours             | h per reference period |
/// | air_change_rate     | changes per 24 h |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscData {
    pub ambient_temp: f64,
    pub room_temp: f64,
    pub temp_unit: TempUnit,
    pub ambient_rh: f64,
    pub occupancy_count: u32,
    pub occupancy_hours: f64,
    pub light_power: f64,
    pub light_hours: f64,
    pub fan_motor_rating: f64,
    pub equipment_usage_hours: f64,
    #[serde(default)]
    pub heaters: Heaters,
    #[serde(default)]
    pub heater_hours: f64,
    /// Overrides the volume-based air-change table when set.
    #[serde(default)]
    pub air_change_rate: Option<f64>,
    /// Door-traffic multiplier on the air-change rate (1.0 = normal).
    pub usage_factor: f64,
    /// Cycle length for batch profiles.
    #[serde(default)]
    pub batch_hours: Option<f64>,
}

impl MiscData {
    /// Copy with temperatures in °C.
    pub fn to_metric(&self) -> MiscData {
        MiscData {
            ambient_temp: converter::celsius(self.ambient_temp, self.temp_unit),
            room_temp: converter::celsius(self.room_temp, self.temp_unit),
            temp_unit: TempUnit::Celsius,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.temp_unit != TempUnit::Celsius {
            return Err(LoadError::units("misc.tempUnit", self.temp_unit, TempUnit::Celsius));
        }
        air_temperature("misc.ambientTemp", self.ambient_temp)?;
        air_temperature("misc.roomTemp", self.room_temp)?;
        positive("misc.ambientRh", self.ambient_rh)?;
        if self.ambient_rh > 100.0 {
            return Err(LoadError::invalid("misc.ambientRh", "relative humidity above 100 %"));
        }
        non_negative("misc.occupancyHours", self.occupancy_hours)?;
        non_negative("misc.lightPower", self.light_power)?;
        non_negative("misc.lightHours", self.light_hours)?;
        non_negative("misc.fanMotorRating", self.fan_motor_rating)?;
        non_negative("misc.equipmentUsageHours", self.equipment_usage_hours)?;
        non_negative("misc.heaters.door", self.heaters.door)?;
        non_negative("misc.heaters.tray", self.heaters.tray)?;
        non_negative("misc.heaters.drain", self.heaters.drain)?;
        non_negative("misc.heaters.peripheral", self.heaters.peripheral)?;
        non_negative("misc.heaterHours", self.heater_hours)?;
        if let Some(rate) = self.air_change_rate {
            positive("misc.airChangeRate", rate)?;
        }
        positive("misc.usageFactor", self.usage_factor)?;
        if let Some(hours) = self.batch_hours {
            positive("misc.batchHours", hours)?;
        }
        Ok(())
    }

    /// Duty hours must fit inside the reference period so every duty
    /// fraction shares one time base.
    pub fn validate_duty(&self, period_hours: f64) -> Result<()> {
        let duties = [
            ("misc.occupancyHours", self.occupancy_hours),
            ("misc.lightHours", self.light_hours),
            ("misc.equipmentUsageHours", self.equipment_usage_hours),
            ("misc.heaterHours", self.heater_hours),
        ];
        for (field, hours) in duties {
            if hours > period_hours {
                return Err(LoadError::invalid(
                    field,
                    format!("{hours} h exceeds the {period_hours} h reference period"),
                ));
            }
        }
        Ok(())
    }
}

// ── Field checks ────────────────────────────────────────────────────

fn finite(field: &'static str, v: f64) -> Result<()> {
    if v.is_finite() { Ok(()) } else { Err(LoadError::invalid(field, "value is not finite")) }
}

fn temperature(field: &'static str, v: f64) -> Result<()> {
    finite(field, v)?;
    if v > ABSOLUTE_ZERO {
        Ok(())
    } else {
        Err(LoadError::invalid(field, format!("{v} °C is not above absolute zero")))
    }
}

/// Air temperatures feed the psychrometric fit, which only holds on
/// [MIN_AIR_TEMP, MAX_AIR_TEMP).
fn air_temperature(field: &'static str, v: f64) -> Result<()> {
    temperature(field, v)?;
    if (MIN_AIR_TEMP..MAX_AIR_TEMP).contains(&v) {
        Ok(())
    } else {
        Err(LoadError::invalid(
            field,
            format!("{v} °C is outside the {MIN_AIR_TEMP} to {MAX_AIR_TEMP} °C air range"),
        ))
    }
}

fn positive(field: &'static str, v: f64) -> Result<()> {
    finite(field, v)?;
    if v > 0.0 { Ok(()) } else { Err(LoadError::invalid(field, format!("must be > 0, got {v}"))) }
}

fn non_negative(field: &'static str, v: f64) -> Result<()> {
    finite(field, v)?;
    if v >= 0.0 { Ok(()) } else { Err(LoadError::invalid(field, format!("must be ≥ 0, got {v}"))) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Profile;

    #[test]
    fn zero_insulation_is_rejected() {
        let mut room = Profile::ColdRoom.defaults().room;
        room.floor_insulation_thickness = 0.0;
        let err = room.validate().unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidInput { field: "room.floorInsulationThickness", .. }
        ));
    }

    #[test]
    fn feet_must_be_converted_first() {
        let mut room = Profile::ColdRoom.defaults().room;
        room.length_unit = LengthUnit::Foot;
        assert!(matches!(room.validate(), Err(LoadError::InconsistentUnits { .. })));
        assert!(room.to_metric().validate().is_ok());
    }

    #[test]
    fn metric_conversion_of_product() {
        let mut product = Profile::Freezer.defaults().product;
        product.mass = 2204.622622;
        product.mass_unit = MassUnit::Pound;
        product.entering_temp = 77.0;
        product.final_temp = 5.0;
        product.freezing_point = 32.0;
        product.temp_unit = TempUnit::Fahrenheit;

        let m = product.to_metric();
        assert!((m.mass - 1000.0).abs() < 1e-6);
        assert!((m.entering_temp - 25.0).abs() < 1e-9);
        assert!((m.final_temp + 15.0).abs() < 1e-9);
        assert!(m.freezing_point.abs() < 1e-9);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn duty_hours_beyond_period() {
        let misc = Profile::ColdRoom.defaults().misc;
        assert!(misc.validate_duty(24.0).is_ok());
        assert!(matches!(
            misc.validate_duty(4.0),
            Err(LoadError::InvalidInput { .. })
        ));
    }

    #[test]
    fn temperatures_above_absolute_zero() {
        assert!(temperature("t", -273.0).is_ok());
        assert!(temperature("t", ABSOLUTE_ZERO).is_err());
        assert!(air_temperature("t", MIN_AIR_TEMP).is_ok());
        assert!(air_temperature("t", -150.0).is_err());
        assert!(air_temperature("t", MAX_AIR_TEMP).is_err());
    }

    #[test]
    fn room_areas() {
        let room = Profile::ColdRoom.defaults().room;
        assert_eq!(room.volume(), 60.0);
        assert_eq!(room.wall_area(), 54.0);
        assert_eq!(room.ceiling_area(), 20.0);
    }
}
