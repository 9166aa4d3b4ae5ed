//! Load calculators.  Each one is a pure function over validated,
//! metric inputs and returns kJ accumulated over a [`ReferencePeriod`];
//! [`aggregate`] converts to kW.
//!
//! [`ReferencePeriod`]: crate::profile::ReferencePeriod
//! [`aggregate`]: aggregate::aggregate

pub mod aggregate;
pub mod air_change;
pub mod misc;
pub mod product;
pub mod psychro;
pub mod transmission;
