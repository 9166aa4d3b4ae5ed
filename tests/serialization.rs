use coldload::{Insulation, LoadFlag, MassUnit, Profile, RoomData, RoomPosition, Surface, TempUnit};
use serde_json::json;

// ═══════════════════════════════════════════════════════════════════
//  JSON snapshots exchanged with the UI and the PDF exporter
// ═══════════════════════════════════════════════════════════════════

#[test]
fn ui_snapshot_deserialises() {
    let room: RoomData = serde_json::from_value(json!({
        "length": 6.0,
        "width": 5.0,
        "height": 3.5,
        "lengthUnit": "m",
        "wallInsulationThickness": 120.0,
        "ceilingInsulationThickness": 120.0,
        "floorInsulationThickness": 80.0,
        "insulationType": "PUF"
    }))
    .unwrap();
    assert_eq!(room.insulation_type, Insulation::Puf);
    assert_eq!(room.position, RoomPosition::Inside);
    assert_eq!(room.floor_insulation_thickness, 80.0);

    let product: coldload::ProductData = serde_json::from_value(json!({
        "productName": "Mango",
        "mass": 1500.0,
        "massUnit": "kg",
        "enteringTemp": 32.0,
        "finalTemp": 10.0,
        "freezingPoint": -1.0,
        "cpAboveFreezing": 3.7,
        "cpBelowFreezing": 1.9,
        "latentHeatOfFusion": 280.0,
        "respirationHeat": 0.05,
        "tempUnit": "C"
    }))
    .unwrap();
    assert_eq!(product.product_name.as_deref(), Some("Mango"));
    assert_eq!(product.mass_unit, MassUnit::Kilogram);
    assert_eq!(product.temp_unit, TempUnit::Celsius);

    let misc = Profile::ColdRoom.defaults().misc;
    let load = Profile::ColdRoom.compute(&room, &product, &misc).unwrap();
    assert!(load.respiration_load > 0.0);
}

#[test]
fn breakdown_uses_camel_case_keys() {
    let d = Profile::Freezer.defaults();
    let load = Profile::Freezer.compute(&d.room, &d.product, &d.misc).unwrap();
    let v = serde_json::to_value(&load).unwrap();

    assert_eq!(v["profile"], "freezer");
    assert!(v["totalLoadKw"].as_f64().unwrap() > 0.0);
    assert!(v["ratedLoadKw"].as_f64().unwrap() > v["totalLoadKw"].as_f64().unwrap());
    assert!(v.get("sensibleHeatRatio").is_some());
    assert!(v.get("airQtyRequired").is_some());
}

#[test]
fn flags_are_tagged() {
    let flag = LoadFlag::NegativeDifferential { surface: Surface::Floor, delta_t: -5.0 };
    let v = serde_json::to_value(&flag).unwrap();
    assert_eq!(v["kind"], "negativeDifferential");
    assert_eq!(v["surface"], "Floor");
    assert_eq!(v["deltaT"], -5.0);
    assert!(v.get("delta_t").is_none());

    let flag = LoadFlag::NegativeEnthalpyDifference { delta_h: -2.5 };
    let v = serde_json::to_value(&flag).unwrap();
    assert_eq!(v["kind"], "negativeEnthalpyDifference");
    assert_eq!(v["deltaH"], -2.5);

    let back: LoadFlag = serde_json::from_value(v).unwrap();
    assert_eq!(back, flag);
}
