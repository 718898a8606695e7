//! Command-line perft driver.

use std::env;
use std::time::{Duration, Instant};

use perft::board::{divide, perft, Board};

struct Suite {
    name: &'static str,
    fen: &'static str,
    depth: u32,
    nodes: u64,
}

const PREDEFINED: &[Suite] = &[
    Suite {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        depth: 6,
        nodes: 119_060_324,
    },
    Suite {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        depth: 5,
        nodes: 193_690_690,
    },
    Suite {
        name: "pins",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        depth: 6,
        nodes: 11_030_083,
    },
    Suite {
        name: "cpw4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
        depth: 5,
        nodes: 15_833_292,
    },
    Suite {
        name: "cpw5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
        depth: 5,
        nodes: 89_941_194,
    },
    Suite {
        name: "cpw6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
        depth: 5,
        nodes: 164_075_551,
    },
    Suite {
        name: "promotions",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - -",
        depth: 6,
        nodes: 71_179_139,
    },
];

#[derive(Default)]
struct Args {
    fen: Option<String>,
    moves: Vec<String>,
    depth: u32,
    upto: bool,
    bench: bool,
    divide: bool,
    compiler: bool,
    help: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--fen" => {
                args.fen = Some(
                    iter.next()
                        .ok_or_else(|| "--fen requires a value".to_string())?,
                );
            }
            "-m" | "--moves" => {
                let list = iter
                    .next()
                    .ok_or_else(|| "--moves requires a value".to_string())?;
                args.moves = list.split(',').map(str::to_string).collect();
            }
            "-d" | "--depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--depth requires a value".to_string())?;
                args.depth = value
                    .parse()
                    .map_err(|_| format!("Invalid depth '{value}'"))?;
            }
            "-u" | "--upto" => args.upto = true,
            "-b" | "--bench" => args.bench = true,
            "--divide" => args.divide = true,
            "-c" | "--compiler" => args.compiler = true,
            "-h" | "--help" => args.help = true,
            other => return Err(format!("Unknown option '{other}'")),
        }
    }

    Ok(args)
}

fn print_help() {
    println!("Perft - legal move counter");
    println!();
    println!("Usage: perft [options]");
    println!("  -f, --fen <FEN|name>  Position as a FEN string or a predefined name");
    println!("  -m, --moves <list>    Comma-separated UCI moves applied to the position");
    println!("  -d, --depth <n>       Search depth");
    println!("  -u, --upto            Calculate for depths 1..n");
    println!("  -b, --bench           Run the predefined benchmark suite");
    println!("      --divide          Print the node count of each root move");
    println!("  -c, --compiler        Show build information");
    println!("  -h, --help            Show this help");
    println!();
    println!("Predefined positions:");
    for suite in PREDEFINED {
        println!(" {: <10} {}", suite.name, suite.fen);
    }
}

fn build_info() -> String {
    let mut out = String::new();
    out.push_str(&format!("OS: {}\n", env::consts::OS));
    out.push_str(&format!("Arch: {}\n", env::consts::ARCH));
    if cfg!(debug_assertions) {
        out.push_str("Profile: debug\n");
    } else {
        out.push_str("Profile: release\n");
    }
    if cfg!(all(target_arch = "x86_64", target_feature = "bmi2")) {
        out.push_str("BMI2 intrinsics\n");
    } else {
        out.push_str("Portable pext/pdep\n");
    }
    out.push_str("Move generation: PEXT bitboards");
    out
}

fn ms(duration: Duration) -> u128 {
    duration.as_millis()
}

fn nps(nodes: u64, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 {
        nodes as f64 / secs
    } else {
        0.0
    }
}

fn run_position(args: &Args) {
    let fen_arg = args.fen.as_deref().unwrap_or_default();

    // Resolve a predefined name and pick up its default depth
    let mut fen = fen_arg.to_string();
    let mut depth = args.depth;
    for suite in PREDEFINED {
        if suite.name == fen_arg || suite.fen == fen_arg {
            fen = suite.fen.to_string();
            if depth == 0 {
                depth = suite.depth;
            }
            break;
        }
    }

    if depth == 0 {
        println!("Error: depth is zero");
        return;
    }

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            println!("Error: {err} when parsing '{fen}'");
            return;
        }
    };

    for uci in &args.moves {
        if let Err(err) = board.make_move_uci(uci) {
            println!("Error: {err} when applying '{uci}'");
            return;
        }
    }

    println!("{board}");
    println!();

    if args.divide {
        let start = Instant::now();
        let split = divide(&board, depth);
        let elapsed = start.elapsed();
        let nodes: u64 = split.iter().map(|m| m.nodes).sum();

        for root_move in &split {
            println!("{root_move}");
        }
        println!();
        println!("{nodes} nodes");
        println!("{} ms", ms(elapsed));
        println!("{:.0} nodes/sec", nps(nodes, elapsed));
        return;
    }

    println!(
        "{: <6} {: <12} {: <12} {}",
        "Depth", "Nodes", "Time (ms)", "Nodes/sec"
    );
    let first = if args.upto { 1 } else { depth };
    for d in first..=depth {
        let start = Instant::now();
        let nodes = perft(&board, d);
        let elapsed = start.elapsed();
        println!(
            "{: <6} {: <12} {: <12} {:.0}",
            d,
            nodes,
            ms(elapsed),
            nps(nodes, elapsed)
        );
    }
}

fn run_bench() {
    println!(
        "{: <10} {: <6} {: <12} {: <12} {: <12} {}",
        "Name", "Depth", "Nodes", "Time (ms)", "Nodes/sec", "Check"
    );

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for suite in PREDEFINED {
        let board = match Board::try_from_fen(suite.fen) {
            Ok(board) => board,
            Err(err) => {
                println!("Error: {err} when parsing '{}'", suite.fen);
                break;
            }
        };

        let start = Instant::now();
        let nodes = perft(&board, suite.depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            "{: <10} {: <6} {: <12} {: <12} {: <12.0} {}",
            suite.name,
            suite.depth,
            nodes,
            ms(elapsed),
            nps(nodes, elapsed),
            if nodes == suite.nodes { "ok" } else { "FAIL" }
        );
    }

    println!(
        "{: <10} {: <6} {: <12} {: <12} {: <12.0}",
        "total/avg",
        "-",
        total_nodes,
        ms(total_time),
        nps(total_nodes, total_time)
    );
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            println!("{message}");
            return;
        }
    };

    if args.compiler {
        println!("{}", build_info());
    }

    let modes = [args.bench, args.upto, args.divide];
    if modes.iter().filter(|&&m| m).count() > 1 {
        println!("Incorrect usage: bench, divide and upto are mutually exclusive options");
        return;
    }

    if args.help {
        print_help();
    } else if args.fen.is_some() {
        run_position(&args);
    } else if args.bench {
        run_bench();
    } else if !args.compiler {
        print_help();
    }
}
