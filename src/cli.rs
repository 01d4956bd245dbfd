#![cfg(feature = "std")]

//! Console front end: coordinate parsing, board rendering and a
//! [`CoordinateSource`] reading from a terminal.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use log::warn;

use crate::{
    board::{Board, TargetView},
    common::ShotResult,
    game::{Side, TurnReport},
    grid::{Cell, Grid},
    ship::Orientation,
    strategy::{CoordinateSource, PlacementChoice, Rejection},
};

/// Largest board `salvo play` will set up; one letter per column.
pub const MAX_CONSOLE_BOARD: usize = 26;

/// Column letters: `A`..`Z`, then `AA`, `AB`, ... for wider boards.
pub fn column_label(c: usize) -> String {
    let mut letters = Vec::new();
    let mut n = c;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Format a coordinate as column letters plus 1-based row, e.g. `B7`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    format!("{}{}", column_label(c), r + 1)
}

/// Parse `B7` into `(row, col) = (6, 1)`. Bounds are checked by the board.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let split = input
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    if letters.is_empty() {
        return Err(format!("Invalid column in '{}' - must start with a letter", input));
    }
    // bijective base 26: A = 1, Z = 26, AA = 27
    let col = letters
        .bytes()
        .try_fold(0usize, |acc, b| {
            let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
            acc.checked_mul(26)?.checked_add(digit)
        })
        .ok_or_else(|| format!("Column '{}' is too large", letters))?;
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 {
        return Err("Row numbers start at 1".to_string());
    }
    Ok((row - 1, col - 1))
}

/// Parse `H`/`V` (case-insensitive, longer words allowed).
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('H') => Ok(Orientation::Horizontal),
        Some('V') => Ok(Orientation::Vertical),
        Some(c) => Err(format!("Invalid orientation '{}' - use H or V", c)),
        None => Err("Missing orientation - use H or V".to_string()),
    }
}

/// Parse a placement line: empty for random, otherwise `<coord> [H|V]`.
/// Orientation defaults to horizontal.
pub fn parse_placement(input: &str) -> Result<PlacementChoice, String> {
    let mut parts = input.split_whitespace();
    let coord = match parts.next() {
        None => return Ok(PlacementChoice::Random),
        Some(coord) => coord,
    };
    let (row, col) = parse_coord(coord)?;
    let orientation = match parts.next() {
        Some(o) => parse_orientation(o)?,
        None => Orientation::Horizontal,
    };
    Ok(PlacementChoice::At {
        row,
        col,
        orientation,
    })
}

fn render(size: usize, cell_at: impl Fn(usize, usize) -> Cell, reveal: bool) -> String {
    let row_width = (size.max(1).ilog10() as usize + 1).max(2);
    let col_width = column_label(size.saturating_sub(1)).len();
    let mut out = String::new();
    let _ = write!(out, "{:row_width$} ", "");
    for c in 0..size {
        let _ = write!(out, " {:<col_width$}", column_label(c));
    }
    out.push('\n');
    for r in 0..size {
        let _ = write!(out, "{:row_width$} ", r + 1);
        for c in 0..size {
            let ch = match cell_at(r, c) {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::ShipPresent if reveal => 'S',
                _ => '~',
            };
            let _ = write!(out, " {:<col_width$}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render a grid; unhit ships are shown only when `reveal` is set.
pub fn render_board(grid: &Grid, reveal: bool) -> String {
    render(
        grid.size(),
        |r, c| grid.get(r, c).unwrap_or(Cell::Empty),
        reveal,
    )
}

/// Render what a shooter knows about the opponent.
pub fn render_target_view(view: &TargetView<'_>) -> String {
    render(
        view.size(),
        |r, c| view.cell(r, c).unwrap_or(Cell::Empty),
        false,
    )
}

/// One-line description of a turn, from the human player's perspective.
pub fn describe_turn(report: &TurnReport) -> String {
    let who = match report.side {
        Side::Player => "You",
        Side::Opponent => "Computer",
    };
    let at = coord_to_string(report.row, report.col);
    match (report.result, report.sunk) {
        (ShotResult::Hit, Some(len)) => {
            format!("{} fired at {}: hit and sunk a ship of length {}!", who, at, len)
        }
        (ShotResult::Hit, None) => format!("{} fired at {}: it's a hit!", who, at),
        (ShotResult::Miss, _) => format!("{} fired at {}: it's a miss.", who, at),
        (ShotResult::AlreadyTargeted, _) => {
            format!("{} fired at {}: already targeted.", who, at)
        }
    }
}

/// Reads placements and targets line by line, printing prompts and boards.
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl ConsoleSource<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the source, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        let written = self.output.write_all(text.as_bytes());
        if let Err(e) = written.and_then(|()| self.output.flush()) {
            warn!("console write failed: {}", e);
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!("console read failed: {}", e);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> CoordinateSource for ConsoleSource<R, W> {
    fn next_placement(&mut self, length: usize, board: &Board) -> Option<PlacementChoice> {
        let rendered = render_board(board.grid(), true);
        self.say(&format!("\nYour board:\n{}", rendered));
        loop {
            self.say(&format!(
                "Ship of length {} - enter placement (e.g. A5 H), or ENTER for random: ",
                length
            ));
            let line = self.read_line()?;
            match parse_placement(&line) {
                Ok(choice) => return Some(choice),
                Err(e) => self.say(&format!("Error: {}\n", e)),
            }
        }
    }

    fn next_target(&mut self, own: &Board, target: TargetView<'_>) -> Option<(usize, usize)> {
        let mine = render_board(own.grid(), true);
        let theirs = render_target_view(&target);
        self.say(&format!("\nYour board:\n{}\nOpponent's board:\n{}", mine, theirs));
        loop {
            self.say("Enter target coordinates (e.g. B7): ");
            let line = self.read_line()?;
            match parse_coord(&line) {
                Ok(coord) => return Some(coord),
                Err(e) => self.say(&format!("Invalid coordinate: {}\n", e)),
            }
        }
    }

    fn rejected(&mut self, rejection: Rejection) {
        let msg = match rejection {
            Rejection::InvalidPlacement(e) => {
                format!("Invalid ship placement ({}). Try again.\n", e)
            }
            Rejection::OutOfBounds { row, col } => format!(
                "{} is off the board. Try again.\n",
                coord_to_string(row, col)
            ),
            Rejection::AlreadyTargeted { row, col } => format!(
                "You already fired at {}. Choose another target.\n",
                coord_to_string(row, col)
            ),
        };
        self.say(&msg);
    }
}
