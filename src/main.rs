use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_agent::*;

mod display;

fn main() -> Result<()> {
    let mut agent = Agent::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("The AI is playing {}.", agent.piece().name());
    println!("{} moves first.\n", Piece::Yellow.name());

    let mut turn = Piece::Yellow;

    // game loop
    loop {
        display::draw(agent.board())?;

        match agent.board().winner() {
            Some(winner) if winner == agent.piece() => {
                println!("AI wins! Game over.");
                break;
            }
            Some(_) => {
                println!("You win! Game over.");
                break;
            }
            None if agent.board().is_full() => {
                println!("Draw!");
                break;
            }
            None => {}
        }

        if turn == agent.piece() {
            println!("AI is thinking...");
            stdout().flush().expect("failed to flush to stdout!");

            let column = agent.select_move();
            agent.apply_move(column)?;
            println!("AI plays column {}\n", column + 1);
        } else {
            // ask until a legal drop lands
            loop {
                print!("Choose a column (1-{}): ", WIDTH);
                stdout().flush().expect("failed to flush to stdout!");

                let mut buffer = String::new();
                stdin.read_line(&mut buffer)?;

                let column = match buffer.trim().parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!("Invalid column: {}", buffer.trim());
                        continue;
                    }
                };

                // the range is already checked, only a full column can fail
                match agent.apply_opponent_move(column) {
                    Ok(()) => break,
                    Err(_) => println!("Column {} is full", column + 1),
                }
            }
            println!();
        }

        turn = turn.opponent();
    }
    Ok(())
}
