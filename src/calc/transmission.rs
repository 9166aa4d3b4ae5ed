//! Conduction through the insulated envelope.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::breakdown::LoadFlag;
use crate::inputs::{Insulation, RoomData, RoomPosition};
use crate::profile::ReferencePeriod;

/// Inside surface film coefficient, W/(m²·K).
pub const INSIDE_FILM_COEFF: f64 = 8.29;

/// Outside surface film coefficient, W/(m²·K).
pub const OUTSIDE_FILM_COEFF: f64 = 25.0;

/// Ground temperature under the floor slab, °C.
pub const GROUND_TEMP: f64 = 20.0;

/// Sun-effect allowance added to ΔT for an outside chamber, K.
pub const SOLAR_ALLOWANCE_WALL: f64 = 3.0;
pub const SOLAR_ALLOWANCE_CEILING: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Walls,
    Ceiling,
    Floor,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Surface::Walls => "walls",
            Surface::Ceiling => "ceiling",
            Surface::Floor => "floor",
        })
    }
}

/// Transmission gains in kJ per reference period.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransmissionLoad {
    pub wall: f64,
    pub ceiling: f64,
    pub floor: f64,
    pub total: f64,
    pub flags: Vec<LoadFlag>,
}

/// Overall transmittance of an insulated panel, W/(m²·K).
///
/// `thickness_mm` must be > 0; validation rejects anything else before
/// this is reached.
pub fn u_value(thickness_mm: f64, insulation: Insulation) -> f64 {
    let resistance = 1.0 / INSIDE_FILM_COEFF
        + (thickness_mm / 1000.0) / insulation.conductivity()
        + 1.0 / OUTSIDE_FILM_COEFF;
    1.0 / resistance
}

pub fn transmission(
    room: &RoomData,
    ambient_temp: f64,
    room_temp: f64,
    period: ReferencePeriod,
) -> TransmissionLoad {
    let (wall_sun, ceiling_sun) = match room.position {
        RoomPosition::Inside => (0.0, 0.0),
        RoomPosition::Outside => (SOLAR_ALLOWANCE_WALL, SOLAR_ALLOWANCE_CEILING),
    };

    let surfaces = [
        (
            Surface::Walls,
            room.wall_area(),
            room.wall_insulation_thickness,
            ambient_temp + wall_sun - room_temp,
        ),
        (
            Surface::Ceiling,
            room.ceiling_area(),
            room.ceiling_insulation_thickness,
            ambient_temp + ceiling_sun - room_temp,
        ),
        (
            Surface::Floor,
            room.floor_area(),
            room.floor_insulation_thickness,
            GROUND_TEMP - room_temp,
        ),
    ];

    let mut load = TransmissionLoad::default();
    for (surface, area, thickness, delta_t) in surfaces {
        let kj = if delta_t < 0.0 {
            warn!("{surface}: room is warmer than its surroundings (ΔT = {delta_t:.2} K), gain ignored");
            load.flags.push(LoadFlag::NegativeDifferential { surface, delta_t });
            0.0
        } else {
            let watts = u_value(thickness, room.insulation_type) * area * delta_t;
            period.kj_from_watts(watts)
        };
        match surface {
            Surface::Walls => load.wall = kj,
            Surface::Ceiling => load.ceiling = kj,
            Surface::Floor => load.floor = kj,
        }
    }
    load.total = load.wall + load.ceiling + load.floor;
    load
}
