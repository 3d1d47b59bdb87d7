//! A player typing moves into the terminal, and the board rendering they look at

use core::fmt;
use std::io::{self, BufRead, Write};

use board::{BoardSquare, Color, Move};
use grid::GridBoard;

/// Draw the board with chess symbols, white at the bottom
pub fn render(board: &GridBoard) -> String {
    let mut out = String::with_capacity(256);
    for row in 0..8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8 {
            let piece = board[BoardSquare::from_row_col(row, col)];
            out.push(' ');
            out.push(if piece.is_empty() { '·' } else { piece.symbol() });
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// Somewhere lines of input come from
///
/// Stdin takes its lock for each line, so any number of players can share the one terminal.
pub trait ReadLine {
    /// Append the next line to `buf`, returning how many bytes were read (0 at end of input)
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl ReadLine for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// An input for a human typing in the terminal
pub struct TerminalUIPlayer<R = io::Stdin, W = io::Stdout> {
    name: String,
    input: R,
    output: W,
}

impl TerminalUIPlayer {
    /// A player reading from stdin and writing to stdout
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_io(name, io::stdin(), io::stdout())
    }
}

impl<R: ReadLine, W: Write> TerminalUIPlayer<R, W> {
    /// A player reading moves from `input` and showing the board on `output`
    pub fn with_io(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Get back the output, mostly to see what was written to it
    pub fn into_output(self) -> W {
        self.output
    }

    fn show_turn(&mut self, board: &GridBoard, color: Color) -> io::Result<()> {
        write!(self.output, "{}", render(board))?;
        writeln!(self.output, "{}'s turn! ({color})", self.name)?;
        writeln!(self.output)?;
        if board.in_check(color) {
            writeln!(self.output, "In check!")?;
        }
        write!(self.output, "Please input your move, like `e2 e4`: ")?;
        self.output.flush()
    }
}

impl<R: ReadLine, W: Write> players::Player for TerminalUIPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Show the board and read one line from the input
    ///
    /// # Panics
    /// If reading the input fails, or the input closes before a move is typed. Nobody is left to
    /// play this side at that point.
    fn poll_move(&mut self, board: &GridBoard, color: Color) -> Option<Move> {
        // A broken terminal isn't worth stopping the game over
        let _ = self.show_turn(board, color);
        let mut buffer = String::new();
        let read = self
            .input
            .read_line(&mut buffer)
            .expect("Error reading human input");
        if read == 0 {
            panic!("Input closed before a move was given");
        }
        match buffer.trim().parse::<Move>() {
            Ok(mv) => Some(mv),
            Err(e) => {
                let _ = writeln!(self.output, "Couldn't read that move: {e}");
                None
            }
        }
    }

    fn reject_move(&mut self, mv: Move, reason: &dyn fmt::Display) {
        let _ = writeln!(self.output, "Can't play {mv}: {reason}");
    }
}
