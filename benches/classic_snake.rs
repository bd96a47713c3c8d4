use battlesnake_maps::board::BoardState;
use battlesnake_maps::maps::{BoardStateEditor, GameMap, MapRegistry};
use battlesnake_maps::settings::Settings;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn start_of_game() -> BoardState {
    let fixture = include_str!("../fixtures/two_snakes_7x7.json");
    let initial = battlesnake_maps::board_fixture(fixture);
    BoardState::new(11, 11).with_snakes(initial.snakes)
}

fn run_turns(map: &dyn GameMap, initial: &BoardState, settings: &Settings, turns: u32) {
    let mut board = BoardState::new(initial.width, initial.height);
    map.setup_board(initial, settings, &mut BoardStateEditor::new(&mut board))
        .unwrap();

    for turn in 1..=turns {
        // pretend the food was eaten every other turn
        if turn % 2 == 0 {
            board.food.clear();
        }
        let last = board.clone().with_turn(turn);
        map.pre_update_board(&last, settings, &mut BoardStateEditor::new(&mut board))
            .unwrap();
        map.post_update_board(&last, settings, &mut BoardStateEditor::new(&mut board))
            .unwrap();
    }
}

fn bench_classic_snake(c: &mut Criterion) {
    let registry = MapRegistry::builtin();
    let map = registry.get_map("classic_snake").unwrap();
    let initial = start_of_game();
    let settings = Settings::default().with_seed(1234);

    c.bench_function("classic snake setup", |b| {
        b.iter(|| run_turns(map, black_box(&initial), &settings, 0))
    });
    c.bench_function("classic snake 100 turns", |b| {
        b.iter(|| run_turns(map, black_box(&initial), &settings, 100))
    });
}

criterion_group!(benches, bench_classic_snake);
criterion_main!(benches);
