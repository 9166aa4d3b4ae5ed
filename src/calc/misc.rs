//! Internal gains: people, lights, fan motors, heaters, respiring produce.

use crate::inputs::{MiscData, ProductData};
use crate::profile::ReferencePeriod;

/// Heat given off by one worker at `room_temp` (°C), W.
///
/// 272 − 6·t, the usual refrigeration-handbook correlation for people
/// doing moderate work in cold spaces.
pub fn person_heat(room_temp: f64) -> f64 {
    (272.0 - 6.0 * room_temp).max(0.0)
}

/// Heater gains in kJ per reference period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaterLoads {
    pub door: f64,
    pub tray: f64,
    pub drain: f64,
    pub peripheral: f64,
    pub total: f64,
}

/// Miscellaneous gains in kJ per reference period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MiscLoad {
    pub occupancy: f64,
    pub lighting: f64,
    pub equipment: f64,
    pub respiration: f64,
    pub heaters: HeaterLoads,
    pub total: f64,
}

/// Duty hours are expected to fit inside `period` (checked by
/// `MiscData::validate_duty`).
pub fn misc_loads(misc: &MiscData, product: &ProductData, period: ReferencePeriod) -> MiscLoad {
    let kj = |watts: f64, hours: f64| watts * hours * 3.6;

    let occupancy = kj(
        f64::from(misc.occupancy_count) * person_heat(misc.room_temp),
        misc.occupancy_hours,
    );
    let lighting = kj(misc.light_power, misc.light_hours);
    let equipment = kj(misc.fan_motor_rating * 1000.0, misc.equipment_usage_hours);
    let respiration = period.kj_from_watts(product.mass * product.respiration_heat);

    let h = misc.heater_hours;
    let door = kj(misc.heaters.door, h);
    let tray = kj(misc.heaters.tray, h);
    let drain = kj(misc.heaters.drain, h);
    let peripheral = kj(misc.heaters.peripheral, h);
    let heaters = HeaterLoads {
        door,
        tray,
        drain,
        peripheral,
        total: kj(misc.heaters.total(), h),
    };

    MiscLoad {
        occupancy,
        lighting,
        equipment,
        respiration,
        heaters,
        total: occupancy + lighting + equipment + respiration + heaters.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Heaters;
    use crate::Profile;
    use approx::assert_relative_eq;

    #[test]
    fn worker_heat_rises_as_room_gets_colder() {
        assert_eq!(person_heat(2.0), 260.0);
        assert_eq!(person_heat(-20.0), 392.0);
        assert_eq!(person_heat(60.0), 0.0);
    }

    #[test]
    fn duty_weighted_gains() {
        let defaults = Profile::ColdRoom.defaults();
        let misc = MiscData {
            room_temp: 2.0,
            occupancy_count: 2,
            occupancy_hours: 5.0,
            light_power: 200.0,
            light_hours: 10.0,
            fan_motor_rating: 0.25,
            equipment_usage_hours: 20.0,
            heaters: Heaters { door: 100.0, tray: 0.0, drain: 50.0, peripheral: 0.0 },
            heater_hours: 24.0,
            ..defaults.misc
        };
        let product = ProductData { respiration_heat: 0.0, ..defaults.product };

        let load = misc_loads(&misc, &product, ReferencePeriod::Daily);
        assert_relative_eq!(load.occupancy, 2.0 * 260.0 * 5.0 * 3.6);
        assert_relative_eq!(load.lighting, 200.0 * 10.0 * 3.6);
        assert_relative_eq!(load.equipment, 250.0 * 20.0 * 3.6);
        assert_relative_eq!(load.heaters.door, 100.0 * 24.0 * 3.6);
        assert_relative_eq!(load.heaters.drain, 50.0 * 24.0 * 3.6);
        assert_eq!(load.heaters.tray, 0.0);
        assert_relative_eq!(load.heaters.total, 150.0 * 24.0 * 3.6);
        assert_relative_eq!(
            load.heaters.total,
            load.heaters.door + load.heaters.tray + load.heaters.drain + load.heaters.peripheral
        );
        assert_eq!(load.respiration, 0.0);
        assert_relative_eq!(
            load.total,
            load.occupancy + load.lighting + load.equipment + load.heaters.total
        );
    }

    #[test]
    fn respiration_runs_the_whole_period() {
        let defaults = Profile::ColdRoom.defaults();
        let product = ProductData { mass: 1000.0, respiration_heat: 0.05, ..defaults.product };
        let load = misc_loads(&defaults.misc, &product, ReferencePeriod::Daily);
        // 50 W for 24 h
        assert_relative_eq!(load.respiration, 50.0 * 86.4, max_relative = 1e-12);
    }
}
