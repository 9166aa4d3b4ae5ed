use log::debug;
use serde::{Deserialize, Serialize};

use crate::breakdown::LoadBreakdown;
use crate::calc::aggregate::aggregate;
use crate::calc::air_change::air_change;
use crate::calc::misc::misc_loads;
use crate::calc::product::{product_load, LatentPolicy};
use crate::calc::transmission::transmission;
use crate::config::Defaults;
use crate::error::*;
use crate::inputs::{MiscData, ProductData, RoomData};

/// Batch length assumed for a blast freezer when none is given, h.
pub const DEFAULT_BATCH_HOURS: f64 = 8.0;

/// Time window over which every calculator accumulates energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "basis")]
pub enum ReferencePeriod {
    /// 24 h; product mass is the daily loading.
    Daily,
    /// One freezing batch; product mass is the batch size.
    Batch { hours: f64 },
}

impl ReferencePeriod {
    pub fn hours(self) -> f64 {
        match self {
            ReferencePeriod::Daily => 24.0,
            ReferencePeriod::Batch { hours } => hours,
        }
    }

    pub fn seconds(self) -> f64 {
        self.hours() * 3600.0
    }

    /// Energy (kJ) of a constant heat flow (W) sustained for the period.
    pub fn kj_from_watts(self, watts: f64) -> f64 {
        watts * self.hours() * 3.6
    }

    /// Mean power (kW) of an energy (kJ) spread over the period.
    pub fn kw(self, kj: f64) -> f64 {
        kj / self.seconds()
    }
}

/// Chamber type.  Selects the reference period, the latent-heat policy
/// and the default input table; the formulas are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Profile {
    ColdRoom,
    Freezer,
    BlastFreezer,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::ColdRoom, Profile::Freezer, Profile::BlastFreezer];

    pub fn reference_period(self, misc: &MiscData) -> ReferencePeriod {
        match self {
            Profile::ColdRoom | Profile::Freezer => ReferencePeriod::Daily,
            Profile::BlastFreezer => ReferencePeriod::Batch {
                hours: misc.batch_hours.unwrap_or(DEFAULT_BATCH_HOURS),
            },
        }
    }

    pub fn latent_policy(self) -> LatentPolicy {
        match self {
            Profile::ColdRoom | Profile::Freezer => LatentPolicy::Crossing,
            Profile::BlastFreezer => LatentPolicy::PartiallyFrozenEntry,
        }
    }

    /// Default input table for this chamber type.
    pub fn defaults(self) -> Defaults {
        Defaults::for_profile(self)
    }

    /// Heat-load breakdown for one input snapshot.
    ///
    /// Inputs must already be on the metric basis (see the `to_metric()`
    /// helpers).  They are validated once here; the calculators assume
    /// valid data.
    ///
    /// ```
    /// use coldload::Profile;
    ///
    /// let d = Profile::Freezer.defaults();
    /// let load = Profile::Freezer.compute(&d.room, &d.product, &d.misc)?;
    /// assert!(load.rated_load_kw > load.total_load_kw);
    /// # Ok::<(), coldload::LoadError>(())
    /// ```
    pub fn compute(
        self,
        room: &RoomData,
        product: &ProductData,
        misc: &MiscData,
    ) -> Result<LoadBreakdown> {
        room.validate()?;
        product.validate()?;
        misc.validate()?;
        let period = self.reference_period(misc);
        misc.validate_duty(period.hours())?;

        let trans = transmission(room, misc.ambient_temp, misc.room_temp, period);
        let prod = product_load(product, self.latent_policy());
        let air = air_change(room, misc, period);
        let other = misc_loads(misc, product, period);
        debug!(
            "{}: {:.0} kJ transmission, {:.0} kJ product, {:.0} kJ air change, {:.0} kJ misc over {} h",
            self,
            trans.total, prod.total, air.load, other.total, period.hours()
        );

        Ok(aggregate(self, period, &trans, &prod, &air, &other))
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Profile::ColdRoom => "Cold room",
            Profile::Freezer => "Freezer room",
            Profile::BlastFreezer => "Blast freezer",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_conversions() {
        assert_eq!(ReferencePeriod::Daily.seconds(), 86_400.0);
        assert_eq!(ReferencePeriod::Batch { hours: 8.0 }.seconds(), 28_800.0);
        assert_eq!(ReferencePeriod::Daily.kw(86_400.0), 1.0);
        assert_eq!(ReferencePeriod::Batch { hours: 2.0 }.kj_from_watts(1000.0), 7200.0);
    }

    #[test]
    fn blast_freezer_runs_on_batches() {
        let mut misc = Profile::BlastFreezer.defaults().misc;
        misc.batch_hours = None;
        assert_eq!(
            Profile::BlastFreezer.reference_period(&misc),
            ReferencePeriod::Batch { hours: DEFAULT_BATCH_HOURS }
        );
        misc.batch_hours = Some(12.0);
        assert_eq!(Profile::BlastFreezer.reference_period(&misc).hours(), 12.0);
        assert_eq!(Profile::Freezer.reference_period(&misc), ReferencePeriod::Daily);
    }
}
