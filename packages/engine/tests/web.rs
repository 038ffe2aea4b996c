#![cfg(target_arch = "wasm32")]

use sandbox_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_round_trip() {
    let mut world = World::with_seed(16, 16, 3).unwrap();
    assert!(world.write_cell(8, 0, 1));
    assert!(!world.write_cell(99, 0, 1));
    world.step();
    assert_eq!(world.species_count(1), 1);
    assert_eq!(world.snapshot().len(), 16 * 16 * 4);
    assert!(World::new(0, 16).is_err());
    assert!(world.load_config("{ \"melt_chance\": 2.0 }".into()).is_err());
}
