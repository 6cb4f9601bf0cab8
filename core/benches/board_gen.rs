use criterion::{Criterion, criterion_group, criterion_main};
use memgrid_core::*;
use std::hint::black_box;

struct NullUi;

impl GameUi for NullUi {
    fn render_tile(&mut self, _index: TileIndex, _face: TileFace, _enabled: bool) {}
    fn show_moves_count(&mut self, _moves: MoveCount) {}
    fn show_completion_message(&mut self, _moves: MoveCount) {}
    fn schedule_delay(&mut self, _delay_ms: u32, _token: DelayToken) {}
    fn cancel_delay(&mut self, _token: DelayToken) {}
}

fn bench_generate(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("generate_standard_board", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomBoardGenerator::new(seed).generate(PAIR_COUNT))
        })
    });
}

fn bench_solved_round(c: &mut Criterion) {
    let board = RandomBoardGenerator::new(1).generate(PAIR_COUNT).unwrap();
    let mut order: Vec<TileIndex> = (0..board.len()).collect();
    order.sort_by_key(|&index| board[index].value);

    c.bench_function("play_solved_round", |b| {
        b.iter(|| {
            let mut game = RoundController::new(board.clone());
            let mut ui = NullUi;
            game.start_new_game(&mut ui);
            for &index in &order {
                black_box(game.on_tile_clicked(index, &mut ui).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_solved_round);
criterion_main!(benches);
