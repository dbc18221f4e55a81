use criterion::{black_box, criterion_group, criterion_main, Criterion};

use triprime::board::{CellId, PlayerId};
use triprime::movegen::{expand_options, explore_options, exterminate_options};
use triprime::sim::play_game;
use triprime::snapshot;

/// A mid-game position: three fleets spread across the map with contact
/// lines in the center, built through the snapshot codec.
fn midgame_document() -> String {
    // (owner index, cell index) placements around the hub and home areas.
    let placements: &[(u8, u8)] = &[
        (0, 0),
        (0, 0),
        (0, 6),
        (0, 13),
        (0, 20),
        (0, 26),
        (0, 26),
        (1, 48),
        (1, 48),
        (1, 42),
        (1, 36),
        (1, 31),
        (1, 25),
        (2, 53),
        (2, 47),
        (2, 41),
        (2, 34),
        (2, 27),
        (2, 27),
    ];
    let ships: Vec<String> = placements
        .iter()
        .map(|(owner, cell)| {
            format!(
                "{{\"owner\":{},\"cell\":{},\"acted\":[false,false,false]}}",
                owner, cell
            )
        })
        .collect();
    format!(
        "{{\"version\":1,\"round\":5,\"scores\":[4,3,6],\
         \"seats\":[\"a\",\"b\",\"c\"],\"ships\":[{}]}}",
        ships.join(",")
    )
}

fn bench_movegen(c: &mut Criterion) {
    let (state, _) = snapshot::decode(&midgame_document()).unwrap();
    c.bench_function("expand_options_midgame", |b| {
        b.iter(|| expand_options(black_box(PlayerId::Red), black_box(&state)))
    });
    c.bench_function("explore_options_midgame", |b| {
        b.iter(|| explore_options(black_box(PlayerId::Yellow), black_box(&state)))
    });
    c.bench_function("exterminate_options_midgame", |b| {
        b.iter(|| exterminate_options(black_box(PlayerId::Blue), black_box(&state)))
    });
}

fn bench_adjacency(c: &mut Criterion) {
    use triprime::board::neighbors;
    let cells: Vec<CellId> = (0..54).filter_map(CellId::from_index).collect();
    c.bench_function("neighbors_full_map", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &cell in &cells {
                total += neighbors(black_box(cell)).len();
            }
            total
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let document = midgame_document();
    c.bench_function("snapshot_decode_midgame", |b| {
        b.iter(|| snapshot::decode(black_box(&document)).unwrap())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_bot_game", |b| {
        b.iter(|| play_game(black_box(0), black_box(42)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_movegen,
    bench_adjacency,
    bench_snapshot,
    bench_full_game
);
criterion_main!(benches);
