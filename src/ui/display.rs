//! Terminal rendering and input prompts for interactive play.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};

use crate::game::{Board, Cell, Player, COLS, ROWS};

const PIECE: &str = "\u{25CF}";

const HEADER: &str = r#"
   ____                            _     _  _
  / ___|___  _ __  _ __   ___  ___| |_  | || |
 | |   / _ \| '_ \| '_ \ / _ \/ __| __| | || |_
 | |__| (_) | | | | | | |  __/ (__| |_  |__   _|
  \____\___/|_| |_|_| |_|\___|\___|\__|    |_|
"#;

pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

fn print_header() {
    println!("{}", HEADER.cyan());
}

fn piece_for(cell: Cell) -> String {
    match cell {
        Cell::Red => PIECE.red().to_string(),
        Cell::Yellow => PIECE.yellow().to_string(),
        Cell::Empty => " ".to_string(),
    }
}

/// Redraw the whole screen with the board grid. `highlight` marks one
/// column header, used for the computer's latest move.
pub fn render_board(board: &Board, highlight: Option<usize>) -> io::Result<()> {
    clear_screen()?;
    print_header();

    print!("\n  ");
    for col in 0..COLS {
        let label = format!("  {} ", col + 1);
        if Some(col) == highlight {
            print!("{}", label.green());
        } else {
            print!("{}", label.cyan());
        }
    }
    println!();

    print!("  \u{250C}");
    for col in 0..COLS {
        print!("\u{2500}\u{2500}\u{2500}");
        print!("{}", if col < COLS - 1 { "\u{252C}" } else { "\u{2510}" });
    }
    println!();

    for row in 0..ROWS {
        print!("  \u{2502}");
        for col in 0..COLS {
            print!(" {} \u{2502}", piece_for(board.get(row, col)));
        }
        println!();

        if row < ROWS - 1 {
            print!("  \u{251C}");
            for col in 0..COLS {
                print!("\u{2500}\u{2500}\u{2500}");
                print!("{}", if col < COLS - 1 { "\u{253C}" } else { "\u{2524}" });
            }
            println!();
        }
    }

    print!("  \u{2514}");
    for col in 0..COLS {
        print!("\u{2500}\u{2500}\u{2500}");
        print!("{}", if col < COLS - 1 { "\u{2534}" } else { "\u{2518}" });
    }
    println!();
    println!();
    Ok(())
}

pub fn print_welcome() -> io::Result<()> {
    clear_screen()?;
    print_header();
    println!("\n{}", "=".repeat(50));
    println!("{}", "            Welcome to Connect 4!".green());
    println!("{}\n", "=".repeat(50));
    println!("  {} = Player 1 (Red)", PIECE.red());
    println!("  {} = Player 2 (Yellow)\n", PIECE.yellow());
    println!("  Rules:");
    println!("  - Players take turns dropping pieces");
    println!("  - First to connect 4 in a row wins");
    println!("  - Rows can be horizontal, vertical, or diagonal\n");
    println!("{}\n", "=".repeat(50));
    Ok(())
}

fn prompt(text: &str) -> io::Result<String> {
    print!("  {}", text.green());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}

pub fn read_menu_choice() -> io::Result<String> {
    println!("  {}\n", "Select Game Mode:".cyan());
    println!("  [1] Two Players");
    println!("  [2] Player vs Computer");
    println!("  [3] Run Benchmark");
    println!("  [Q] Quit\n");
    prompt("Enter choice: ")
}

pub fn read_move() -> io::Result<String> {
    prompt("Enter column (1-7) or 'q' to quit: ")
}

pub fn read_play_again() -> io::Result<String> {
    prompt("Play again? (y/n): ")
}

pub fn pause() -> io::Result<()> {
    prompt("Press Enter to continue...").map(|_| ())
}

pub fn print_turn(player: Player, is_computer: bool) {
    if is_computer {
        println!("  {}", "Computer is thinking...".magenta());
    } else {
        let line = format!("{}'s turn", label_for(player));
        println!("  {}", colorize(line, player));
    }
}

pub fn print_winner(player: Player, is_computer: bool) {
    let banner = "*".repeat(30);
    if is_computer {
        println!("\n  {}", banner.clone().magenta());
        println!("  {}", "  Computer wins!".magenta());
        println!("  {}\n", banner.magenta());
    } else {
        let line = format!("  {} wins!", label_for(player));
        println!("\n  {}", colorize(banner.clone(), player));
        println!("  {}", colorize(line, player));
        println!("  {}\n", colorize(banner, player));
    }
}

pub fn print_draw() {
    let banner = "*".repeat(30);
    println!("\n  {banner}");
    println!("    It's a draw!");
    println!("  {banner}\n");
}

pub fn print_invalid_move() {
    println!("  {}", "Invalid move! Try again.".red());
}

pub fn print_computer_move(col: usize) {
    println!(
        "  {}",
        format!("Computer played column {}", col + 1).magenta()
    );
}

fn label_for(player: Player) -> &'static str {
    match player {
        Player::Red => "Player 1",
        Player::Yellow => "Player 2",
    }
}

fn colorize(text: String, player: Player) -> String {
    match player {
        Player::Red => text.red().to_string(),
        Player::Yellow => text.yellow().to_string(),
    }
}
