//! Infiltration through door openings.

use log::warn;

use super::psychro::{AirState, CHAMBER_RH};
use crate::breakdown::LoadFlag;
use crate::inputs::{MiscData, RoomData};
use crate::profile::ReferencePeriod;

const FT3_PER_M3: f64 = 35.314_667;

// ── Average air changes per 24 h due to door openings ───────────────
// (room volume ft³, chamber above 0 °C, chamber below 0 °C)
static AIR_CHANGES_PER_DAY: [(f64, f64, f64); 23] = [
    (200.0, 44.0, 33.5),
    (300.0, 34.5, 26.2),
    (400.0, 29.5, 22.5),
    (500.0, 26.0, 20.0),
    (600.0, 23.0, 18.0),
    (800.0, 20.0, 15.3),
    (1_000.0, 17.5, 13.5),
    (1_500.0, 14.0, 11.0),
    (2_000.0, 12.0, 9.3),
    (3_000.0, 9.5, 7.4),
    (4_000.0, 8.2, 6.3),
    (5_000.0, 7.2, 5.6),
    (6_000.0, 6.5, 5.0),
    (8_000.0, 5.5, 4.3),
    (10_000.0, 4.9, 3.8),
    (15_000.0, 3.9, 3.0),
    (20_000.0, 3.5, 2.6),
    (25_000.0, 3.0, 2.3),
    (30_000.0, 2.7, 2.1),
    (40_000.0, 2.3, 1.8),
    (50_000.0, 2.0, 1.6),
    (75_000.0, 1.6, 1.3),
    (100_000.0, 1.4, 1.1),
];

/// Infiltration gain in kJ per reference period.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirChangeLoad {
    /// Air changes applied over the period.
    pub changes: f64,
    /// Ambient minus chamber enthalpy, kJ/kg dry air.
    pub enthalpy_difference: f64,
    pub load: f64,
    pub flags: Vec<LoadFlag>,
}

/// Table value for a room of `volume_m3`, linearly interpolated and held
/// constant beyond the table ends.
pub fn air_changes_per_day(volume_m3: f64, room_temp: f64) -> f64 {
    let ft3 = volume_m3 * FT3_PER_M3;
    let column = |row: &(f64, f64, f64)| if room_temp >= 0.0 { row.1 } else { row.2 };

    let first = &AIR_CHANGES_PER_DAY[0];
    let last = &AIR_CHANGES_PER_DAY[AIR_CHANGES_PER_DAY.len() - 1];
    if ft3 <= first.0 {
        return column(first);
    }
    if ft3 >= last.0 {
        return column(last);
    }

    for pair in AIR_CHANGES_PER_DAY.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if ft3 <= hi.0 {
            let frac = (ft3 - lo.0) / (hi.0 - lo.0);
            return column(lo) + frac * (column(hi) - column(lo));
        }
    }
    column(last)
}

pub fn air_change(room: &RoomData, misc: &MiscData, period: ReferencePeriod) -> AirChangeLoad {
    let volume = room.volume();
    let per_day = misc
        .air_change_rate
        .unwrap_or_else(|| air_changes_per_day(volume, misc.room_temp));
    let changes = per_day * period.hours() / 24.0 * misc.usage_factor;

    let outside = AirState::new(misc.ambient_temp, misc.ambient_rh);
    let inside = AirState::new(misc.room_temp, CHAMBER_RH);
    let enthalpy_difference = outside.enthalpy - inside.enthalpy;

    let mut flags = Vec::new();
    let load = if !enthalpy_difference.is_finite() {
        warn!(
            "enthalpy difference is not finite for {} °C ambient / {} °C room, gain ignored",
            misc.ambient_temp, misc.room_temp
        );
        flags.push(LoadFlag::NonFiniteEnthalpy {
            ambient_temp: misc.ambient_temp,
            room_temp: misc.room_temp,
        });
        0.0
    } else if enthalpy_difference < 0.0 {
        warn!("infiltrating air is lower in enthalpy than chamber air (Δh = {enthalpy_difference:.2} kJ/kg), gain ignored");
        flags.push(LoadFlag::NegativeEnthalpyDifference { delta_h: enthalpy_difference });
        0.0
    } else {
        volume * changes * enthalpy_difference / outside.specific_volume
    };

    AirChangeLoad { changes, enthalpy_difference, load, flags }
}
