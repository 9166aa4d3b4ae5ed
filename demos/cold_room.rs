use coldload::{Insulation, PowerUnit, Profile, RoomPosition};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Site conditions may come from COLDLOAD_AMBIENT_TEMP / COLDLOAD_AMBIENT_RH
    // in the environment or a .env file.
    let mut d = Profile::ColdRoom.defaults().with_env()?;

    // ── A 10 × 6 × 4 m produce store, outside the main building ─────
    d.room.length = 10.0;
    d.room.width = 6.0;
    d.room.height = 4.0;
    d.room.insulation_type = Insulation::Puf;
    d.room.position = RoomPosition::Outside;

    d.product.product_name = Some("Apples".into());
    d.product.mass = 8000.0;
    d.product.entering_temp = 28.0;
    d.product.final_temp = 1.0;
    d.product.freezing_point = -1.1;
    d.product.cp_above_freezing = 3.6;
    d.product.respiration_heat = 0.02;

    d.misc.room_temp = 0.0;
    d.misc.occupancy_count = 2;

    let load = Profile::ColdRoom.compute(&d.room, &d.product, &d.misc)?;
    println!("{load}\n");
    println!(
        "Rated = {:.2} TR",
        load.rated_load_in(PowerUnit::TonRefrigeration)
    );

    for flag in &load.flags {
        println!("warning: {flag:?}");
    }
    Ok(())
}
