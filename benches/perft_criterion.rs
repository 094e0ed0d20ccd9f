use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tabula_chess::game_state::chess_rules::INITIAL_BOARD_NOTATION;
use tabula_chess::game_state::chess_types::{Board, CastlingRights, Color, Flags};
use tabula_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use tabula_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    board: &'static str,
    color: Color,
    castling: CastlingRights,
    expected_nodes: &'static [u64],
}

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        board: INITIAL_BOARD_NOTATION,
        color: Color::White,
        castling: CastlingRights::ALL,
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "position_2",
        board: KIWIPETE,
        color: Color::White,
        castling: CastlingRights::ALL,
        expected_nodes: &[48],
    },
    BenchCase {
        name: "position_3",
        board: POSITION_3,
        color: Color::White,
        castling: CastlingRights::NONE,
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        board: INITIAL_BOARD_NOTATION,
        color: Color::White,
        castling: CastlingRights::ALL,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        board: KIWIPETE,
        color: Color::White,
        castling: CastlingRights::ALL,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        board: POSITION_3,
        color: Color::White,
        castling: CastlingRights::NONE,
        expected_nodes: &[14, 191, 2812],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("TABULA_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let board = Board::from_notation(case.board).expect("benchmark board should parse");
        let flags = Flags::new(case.color, case.castling, "");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &board, &flags, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(
                            &LegalMoveGenerator,
                            black_box(&board),
                            black_box(&flags),
                            black_box(depth),
                        );
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
