use approx::assert_relative_eq;
use coldload::calc::aggregate::aggregate;
use coldload::calc::air_change::AirChangeLoad;
use coldload::calc::misc::MiscLoad;
use coldload::calc::product::ProductLoad;
use coldload::calc::transmission::TransmissionLoad;
use coldload::{Defaults, LoadBreakdown, Profile, ReferencePeriod, SAFETY_FACTOR};

/// A spread of realistic inputs for every chamber type.
fn scenarios() -> Vec<(Profile, Defaults)> {
    let mut out = Vec::new();
    for profile in Profile::ALL {
        let base = profile.defaults();
        for ambient in [25.0, 35.0, 45.0] {
            for (entering, fin) in [(30.0, 4.0), (25.0, -15.0), (-5.0, -30.0), (10.0, 10.0), (-2.0, -2.0)] {
                for mass in [0.0, 500.0, 5000.0] {
                    let mut d = base.clone();
                    d.misc.ambient_temp = ambient;
                    d.product.entering_temp = entering;
                    d.product.final_temp = fin;
                    d.product.mass = mass;
                    out.push((profile, d));
                }
            }
        }
    }
    out
}

fn run(profile: Profile, d: &Defaults) -> LoadBreakdown {
    profile
        .compute(&d.room, &d.product, &d.misc)
        .unwrap_or_else(|e| panic!("{profile} failed on {d:?}: {e}"))
}

// ═══════════════════════════════════════════════════════════════════
//  Properties that hold for every profile and input
// ═══════════════════════════════════════════════════════════════════

#[test]
fn every_field_finite_and_non_negative() {
    for (profile, d) in scenarios() {
        let load = run(profile, &d);
        for (name, value) in load.fields() {
            assert!(
                value.is_finite() && value >= 0.0,
                "{profile}: {name} = {value} for {d:?}"
            );
        }
    }
}

#[test]
fn transmission_total_is_sum_of_surfaces() {
    for (profile, d) in scenarios() {
        let l = run(profile, &d);
        assert_relative_eq!(
            l.total_transmission_load,
            l.wall_load + l.ceiling_load + l.floor_load,
            max_relative = 1e-12
        );
    }
}

#[test]
fn product_total_is_sum_of_stages() {
    for (profile, d) in scenarios() {
        let l = run(profile, &d);
        assert_relative_eq!(
            l.total_product_load,
            l.before_freezing_load + l.latent_heat_load + l.after_freezing_load,
            max_relative = 1e-12
        );
    }
}

#[test]
fn grand_total_is_sum_of_categories() {
    for (profile, d) in scenarios() {
        let l = run(profile, &d);
        let sum = l.total_transmission_load + l.total_product_load + l.air_change_load + l.total_misc_load;
        assert_relative_eq!(l.total_load_kw, sum, max_relative = 1e-12);
        assert_relative_eq!(l.sensible_heat + l.latent_heat, l.total_load_kw, max_relative = 1e-12);
    }
}

#[test]
fn rated_load_carries_twenty_percent() {
    assert_eq!(SAFETY_FACTOR, 1.20);
    for (profile, d) in scenarios() {
        let l = run(profile, &d);
        assert_relative_eq!(l.rated_load_kw, l.total_load_kw * 1.20, max_relative = 1e-12);
        assert!(l.rated_load_kw > l.total_load_kw);
    }
}

#[test]
fn sensible_heat_ratio_in_unit_interval() {
    for (profile, d) in scenarios() {
        let l = run(profile, &d);
        assert!(
            (0.0..=1.0).contains(&l.sensible_heat_ratio),
            "{profile}: SHR = {}",
            l.sensible_heat_ratio
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Product path edge cases
// ═══════════════════════════════════════════════════════════════════

#[test]
fn no_temperature_change_no_product_load() {
    for profile in Profile::ALL {
        let mut d = profile.defaults();
        let fp = d.product.freezing_point;
        for t in [fp + 5.0, fp, fp - 5.0] {
            d.product.entering_temp = t;
            d.product.final_temp = t;
            let l = run(profile, &d);
            assert_eq!(l.total_product_load, 0.0, "{profile} at {t} °C");
        }
    }
}

#[test]
fn no_freezing_above_freezing_point() {
    for profile in Profile::ALL {
        let mut d = profile.defaults();
        let fp = d.product.freezing_point;
        for fin in [fp, fp + 0.5, fp + 10.0] {
            d.product.entering_temp = fp + 20.0;
            d.product.final_temp = fin;
            let l = run(profile, &d);
            assert_eq!(l.latent_heat_load, 0.0, "{profile}: final {fin} °C");
            assert_eq!(l.after_freezing_load, 0.0, "{profile}: final {fin} °C");
        }
    }
}

#[test]
fn ratio_is_zero_without_any_load() {
    let l = aggregate(
        Profile::ColdRoom,
        ReferencePeriod::Daily,
        &TransmissionLoad::default(),
        &ProductLoad::default(),
        &AirChangeLoad::default(),
        &MiscLoad::default(),
    );
    assert_eq!(l.sensible_heat, 0.0);
    assert_eq!(l.latent_heat, 0.0);
    assert_eq!(l.sensible_heat_ratio, 0.0);
    assert_eq!(l.air_qty_required, 0.0);
    assert_eq!(l.total_load_kw, 0.0);
}

// ═══════════════════════════════════════════════════════════════════
//  Purity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn repeated_and_parallel_calls_agree() {
    let d = Profile::Freezer.defaults();
    let first = run(Profile::Freezer, &d);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let d = d.clone();
            std::thread::spawn(move || run(Profile::Freezer, &d))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), first);
    }
}

#[test]
fn warm_room_is_flagged() {
    let mut d = Profile::ColdRoom.defaults();
    d.misc.room_temp = 25.0;
    d.misc.ambient_temp = 20.0;
    d.product.entering_temp = 30.0;
    d.product.final_temp = 25.0;
    let l = run(Profile::ColdRoom, &d);
    assert!(!l.flags.is_empty());
    assert_eq!(l.wall_load, 0.0);
    assert!(l.total_load_kw >= 0.0);
}
