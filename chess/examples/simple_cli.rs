// Simple command-line application to move pieces around the board
//
// Enter a square (e.g. `g1`) to see where its piece may go, or two squares (e.g. `e2 e4`) to
// make a move. An empty line or end of input quits.

use chessrules::{board::PrettyStyle, movegen::Highlights, Color, Coord, Game};
use std::io::{self, BufRead, Write};

fn parse_squares(s: &str) -> Option<Vec<Coord>> {
    let s: String = s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if s.len() % 2 != 0 || s.is_empty() || !s.is_ascii() {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| s[i..i + 2].parse().ok())
        .collect()
}

fn main() {
    let mut stdin = io::stdin().lock();

    let mut game = Game::new();
    let mut marks = Highlights::default();

    loop {
        println!("{}", game.board().pretty_marked(PrettyStyle::Ascii, marks));
        marks = Highlights::default();
        let side = match game.side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        print!("{} move: ", side);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 || s.trim().is_empty() {
            break;
        }

        let squares = match parse_squares(&s) {
            Some(squares) => squares,
            None => {
                println!("Bad input: {:?}", s.trim());
                println!();
                continue;
            }
        };

        match squares[..] {
            [src] => match game.board().piece_at(src) {
                Some(piece) => {
                    marks = game.highlights(piece.id());
                    if marks.all().is_empty() {
                        println!("{} cannot move now", piece);
                    }
                }
                None => println!("No piece on {}", src),
            },
            [src, dst] => match game.play_squares(src, dst) {
                Ok(Some(captured)) => println!("Captured {}", captured),
                Ok(None) => {}
                Err(e) => println!("Bad move: {}", e),
            },
            _ => println!("Enter one or two squares"),
        }

        println!();
    }
}
