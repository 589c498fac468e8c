//! Replays the bundled scenario files end to end

use std::path::PathBuf;

use faction_claims::core::config::FillConfig;
use faction_claims::core::types::FactionId;
use faction_claims::fill::ClaimFiller;
use faction_claims::grid::GridPoint;
use faction_claims::sim::{render_level, Replay, Scenario};

fn data_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative)
}

fn faction(replay: &Replay, name: &str) -> FactionId {
    replay
        .factions
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, id)| *id)
        .unwrap()
}

#[test]
fn test_bundled_config_loads() {
    let config = FillConfig::load(&data_path("fill.toml")).unwrap();
    assert_eq!(config, FillConfig::default());
}

#[test]
fn test_ring_scenario() {
    let scenario = Scenario::load(&data_path("scenarios/ring.toml")).unwrap();
    let replay = scenario.replay(ClaimFiller::new(FillConfig::default()));

    let red = faction(&replay, "red");
    let blue = faction(&replay, "blue");
    assert_eq!(replay.store.count_for(red, &replay.level), 16 + 8);
    assert_eq!(replay.store.count_for(blue, &replay.level), 3);
    assert_eq!(replay.refused, 0);

    let map = render_level(&replay.store, &replay.level, &replay.factions);
    assert_eq!(
        map,
        "rrrrr...\nrrrrr...\nrrbrr.bb\nrrrrr...\nrrrrr...\n"
    );
}

#[test]
fn test_two_rooms_scenario() {
    let scenario = Scenario::load(&data_path("scenarios/two_rooms.toml")).unwrap();
    let replay = scenario.replay(ClaimFiller::new(FillConfig::default()));

    let green = faction(&replay, "green");
    assert_eq!(replay.store.count_for(green, &replay.level), 28);
    for (x, z) in [(1, 1), (2, 2), (1, 4), (2, 5)] {
        assert!(replay
            .store
            .level_claims(&replay.level)
            .any(|(p, f)| p == GridPoint::new(x, z) && f == green));
    }
}

#[test]
fn test_fill_disabled_leaves_rooms_open() {
    let scenario = Scenario::load(&data_path("scenarios/two_rooms.toml")).unwrap();
    let replay = scenario.replay(ClaimFiller::new(FillConfig::default().disabled()));
    assert_eq!(replay.store.len(), 20);
}
