use coldload::Profile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<15} {:>10} {:>10} {:>12} {:>8} {:>8}",
        "chamber", "base kW", "rated kW", "BTU/hr", "SHR", "CFM");

    for profile in Profile::ALL {
        let d = profile.defaults();
        let load = profile.compute(&d.room, &d.product, &d.misc)?;
        println!("{:<15} {:>10.2} {:>10.2} {:>12.0} {:>8.3} {:>8.0}",
            profile.to_string(),
            load.total_load_kw,
            load.rated_load_kw,
            load.total_load_btu_hr(),
            load.sensible_heat_ratio,
            load.air_qty_required,
        );
    }
    Ok(())
}
