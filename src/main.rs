use std::time::Duration;

use rand::SeedableRng;

use chess_porter::render::LiveFrame;
use chess_porter::{Agent, Board, Redistributor};

const DEFAULT_COLUMNS: usize = 10;
const DEFAULT_MAX_HEIGHT: usize = 8;
const DEFAULT_DELAY_MS: u64 = 60;

struct MainArgs {
    columns: usize,
    max_height: usize,
    delay: Duration,
    seed: Option<u64>,
}

fn parse_args() -> MainArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut columns = DEFAULT_COLUMNS;
    let mut max_height = DEFAULT_MAX_HEIGHT;
    let mut delay_ms = DEFAULT_DELAY_MS;
    let mut seed = None;
    let next_arg = |i: usize, flag: &str| -> &str {
        args.get(i)
            .map(String::as_str)
            .unwrap_or_else(|| panic!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--columns" => {
                i += 1;
                columns = next_arg(i, "--columns")
                    .parse()
                    .expect("--columns requires a positive integer");
                assert!(columns >= 1, "--columns requires a positive integer");
            }
            "--max-height" => {
                i += 1;
                max_height = next_arg(i, "--max-height")
                    .parse()
                    .expect("--max-height requires a positive integer");
                assert!(max_height >= 1, "--max-height requires a positive integer");
            }
            "--delay-ms" => {
                i += 1;
                delay_ms = next_arg(i, "--delay-ms")
                    .parse()
                    .expect("--delay-ms requires a non-negative integer");
            }
            "--seed" => {
                i += 1;
                seed = Some(
                    next_arg(i, "--seed")
                        .parse()
                        .expect("--seed requires an unsigned integer"),
                );
            }
            other => panic!(
                "unknown argument: {other}\nusage: chess-porter [--columns N] [--max-height N] [--delay-ms N] [--seed N]"
            ),
        }
        i += 1;
    }
    MainArgs {
        columns,
        max_height,
        delay: Duration::from_millis(delay_ms),
        seed,
    }
}

fn main() {
    let args = parse_args();

    let board = match args.seed {
        Some(seed) => Board::random(
            args.columns,
            args.max_height,
            &mut rand::rngs::StdRng::seed_from_u64(seed),
        ),
        None => Board::random(args.columns, args.max_height, &mut rand::rng()),
    };

    let mut frame = LiveFrame::new(args.delay);
    let mut redist = Redistributor::new(Agent::new(board));
    redist.run(|board| frame.draw(board).expect("draw board frame"));

    let board = redist.board();
    println!("\n  Board size: {}(rows) x {}(columns)", board.rows() - 1, board.cols() - 1);
    println!("Total tokens: {}", board.total_tokens());
    println!("  Walk steps: {}", redist.steps());
}
