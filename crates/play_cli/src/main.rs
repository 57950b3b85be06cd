//! Interactive play CLI
//!
//! Plays a terminal game of human (black) against the trained linear
//! engine (red), loading the engine's weights from the training state file.

mod input;

use std::env;

use checkers_core::{legal_moves, BoardDisplay, MoveSource, Position, Side};
use input::StdinMoveSource;
use linear_engine::LinearPolicy;
use trainer::TrainingState;

fn main() {
    let args: Vec<String> = env::args().collect();
    let state_path = match args.get(1).map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("Usage: play_checkers [STATE_FILE]");
            println!();
            println!("You play black (b/B, top of the board); the engine plays red.");
            println!("Enter moves as 'row,col row,col', e.g. '2,0 3,1'.");
            return;
        }
        Some(path) => path.to_string(),
        None => "training_state.json".to_string(),
    };

    let state = match TrainingState::load_or_default(&state_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Engine weights from {} ({} simulations)",
        state_path, state.simulations
    );
    println!("You play black. Moves are 'row,col row,col'.");

    let mut red = LinearPolicy::greedy(state.red);
    let mut human = StdinMoveSource::new(Side::Black);

    let mut pos = Position::start();
    loop {
        println!();
        println!("{}", BoardDisplay(&pos));

        let to_move = pos.turn();
        if pos.side_eliminated(to_move) {
            println!("{:?} has no pieces left. {:?} wins!", to_move, to_move.other());
            break;
        }

        let legal = legal_moves(&mut pos);
        if legal.is_empty() {
            println!("{:?} has no legal moves. {:?} wins!", to_move, to_move.other());
            break;
        }

        let mv = match to_move {
            Side::Red => {
                let mv = red.choose_move(&pos, &legal);
                let from = pos.square_of(mv.piece).unwrap_or((0, 0));
                println!(
                    "Engine moves {},{} to {},{}{}",
                    from.0,
                    from.1,
                    mv.row,
                    mv.col,
                    if mv.is_capture() { " (capture)" } else { "" }
                );
                mv
            }
            Side::Black => human.choose_move(&pos, &legal),
        };

        if let Err(e) = pos.apply(&mv) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
