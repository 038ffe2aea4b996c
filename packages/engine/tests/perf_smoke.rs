use sandbox_engine::World;

#[test]
fn perf_smoke_step() {
    let Ok(mut world) = World::with_seed(128, 64, 1) else {
        panic!("world creation failed");
    };
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.write_cell(x, y, 1); // sand
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 128 * 64);
    assert_eq!(world.cells_len(), 128 * 64 * 4);
}
