//! # coldload
//!
//! Refrigeration heat-load estimates for **cold rooms**, **freezer
//! rooms** and **blast freezers**, following the ASHRAE-style spreadsheet
//! method used for sizing refrigeration plant.
//!
//! ## Highlights
//!
//! * **One entry point per chamber** — `Profile::Freezer.compute(&room, &product, &misc)`
//! * **Itemised output** — walls, ceiling, floor, product stages, air change,
//!   people, lights, motors, heaters, respiration
//! * **Sensible/latent split** — sensible-heat ratio and evaporator CFM
//! * **Safety margin** — base load and the 20 % rated load, side by side
//! * **Pure** — no state between calls, safe to run from any thread
//!
//! ## Quick example
//!
//! ```
//! use coldload::Profile;
//!
//! let d = Profile::ColdRoom.defaults();
//! let load = Profile::ColdRoom.compute(&d.room, &d.product, &d.misc)?;
//!
//! println!("base  = {:.2} kW", load.total_load_kw);
//! println!("rated = {:.2} kW", load.rated_load_kw);
//! println!("      = {:.0} BTU/hr", load.total_load_btu_hr());
//! # Ok::<(), coldload::LoadError>(())
//! ```
//!
//! ## Units
//!
//! The engine works on °C, m, kg and kW.  Inputs entered in other units
//! carry their unit tags and are converted with `to_metric()`; passing
//! unconverted tags to `compute` is rejected with
//! [`LoadError::InconsistentUnits`].
//!
//! ```
//! use coldload::{Profile, LengthUnit, TempUnit};
//!
//! let mut d = Profile::Freezer.defaults();
//! d.room.length = 16.0;
//! d.room.width = 13.0;
//! d.room.height = 10.0;
//! d.room.length_unit = LengthUnit::Foot;
//! d.misc.ambient_temp = 95.0;
//! d.misc.room_temp = 5.0;
//! d.misc.temp_unit = TempUnit::Fahrenheit;
//!
//! assert!(Profile::Freezer.compute(&d.room, &d.product, &d.misc).is_err());
//!
//! let load = Profile::Freezer.compute(&d.room.to_metric(), &d.product, &d.misc.to_metric())?;
//! assert!(load.total_load_kw > 0.0);
//! # Ok::<(), coldload::LoadError>(())
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod breakdown;
pub mod calc;
pub mod config;
pub mod error;
pub mod inputs;
pub mod profile;

// ── Public re-exports ────────────────────────────────────────────────
pub use breakdown::{LoadBreakdown, LoadFlag};
pub use calc::aggregate::SAFETY_FACTOR;
pub use calc::product::LatentPolicy;
pub use calc::transmission::Surface;
pub use config::Defaults;
pub use error::{LoadError, Result};
pub use inputs::{Heaters, Insulation, MiscData, ProductData, RoomData, RoomPosition};
pub use profile::{Profile, ReferencePeriod};

pub use converter::{
    Converter, UnitSystem,
    TempUnit, LengthUnit, MassUnit, PowerUnit,
    BTU_HR_PER_KW,
};
