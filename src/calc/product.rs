//! Three-stage product pull-down: sensible above freezing, phase change,
//! sensible below freezing.

use serde::{Deserialize, Serialize};

use crate::inputs::ProductData;

/// When the phase-change stage applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatentPolicy {
    /// The temperature path must cross the freezing point.
    Crossing,
    /// Product may enter already below its freezing point without being
    /// fully frozen; latent heat applies whenever it is cooled to below
    /// the freezing point.
    PartiallyFrozenEntry,
}

/// Product heat in kJ per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProductLoad {
    pub before_freezing: f64,
    pub latent: f64,
    pub after_freezing: f64,
    pub total: f64,
}

pub fn product_load(product: &ProductData, policy: LatentPolicy) -> ProductLoad {
    let m = product.mass;
    let t_in = product.entering_temp;
    let t_out = product.final_temp;
    let fp = product.freezing_point;

    let before_freezing = if t_in > fp {
        m * product.cp_above_freezing * (t_in - t_out.max(fp))
    } else {
        0.0
    };

    let latent_active = match policy {
        LatentPolicy::Crossing => t_in > fp && t_out < fp,
        LatentPolicy::PartiallyFrozenEntry => t_out < fp && t_in > t_out,
    };
    let latent = if latent_active { m * product.latent_heat_of_fusion } else { 0.0 };

    let after_freezing = if t_out < fp {
        m * product.cp_below_freezing * (t_in.min(fp) - t_out)
    } else {
        0.0
    };

    ProductLoad {
        before_freezing,
        latent,
        after_freezing,
        total: before_freezing + latent + after_freezing,
    }
}
