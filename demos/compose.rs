//! Compose demo: Build a scene out of sparse layers and render it.
//!
//! Plays the downstream renderer's role: walks occupied cells in
//! row-major order and translates each opaque style into crossterm
//! colors.

use std::io::{self, Write};

use crossterm::style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;
use tessera::{Bounds, Buffer, Cell, Modifiers, Rgb, Style};

fn backdrop(cols: i32, rows: i32) -> Buffer {
    let style = Style::DEFAULT
        .with_fg(Rgb::new(90, 90, 90))
        .with_attrs(Modifiers::DIM);
    let mut buf = Buffer::new();
    for y in 0..rows {
        for x in 0..cols {
            buf.set(x, y, Cell::styled('.', style));
        }
    }
    buf
}

fn banner() -> Buffer {
    let style = Style::DEFAULT
        .with_fg(Rgb::new(255, 200, 40))
        .with_bg(Rgb::new(40, 40, 120))
        .with_attrs(Modifiers::BOLD);
    let mut buf = Buffer::new();
    buf.write(6, 2, " tessera ", style);
    buf
}

fn render(buf: &Buffer) -> io::Result<()> {
    let mut stdout = io::stdout();
    let bounds = buf.bounds();

    for y in bounds.min_y..bounds.max_y {
        for x in bounds.min_x..bounds.max_x {
            match buf.get(x, y) {
                Some(cell) => {
                    let style = cell.style();
                    stdout
                        .queue(SetForegroundColor(Color::Rgb {
                            r: style.fg.r,
                            g: style.fg.g,
                            b: style.fg.b,
                        }))?
                        .queue(SetBackgroundColor(Color::Rgb {
                            r: style.bg.r,
                            g: style.bg.g,
                            b: style.bg.b,
                        }))?;
                    write!(stdout, "{}", cell.ch())?;
                }
                None => {
                    stdout.queue(ResetColor)?;
                    write!(stdout, " ")?;
                }
            }
        }
        stdout.queue(ResetColor)?;
        writeln!(stdout)?;
    }
    stdout.flush()
}

fn main() -> io::Result<()> {
    println!("Tessera Compose Demo");
    println!("====================");
    println!();

    let base = backdrop(24, 5);
    let composed = &base + &banner();
    println!(
        "backdrop {} cells + banner -> {} cells, extent {:?}",
        base.len(),
        composed.len(),
        composed.bounds()
    );
    render(&composed)?;
    println!();

    // Crop a viewport out of the scene
    let viewport = &composed & Bounds::new(4, 1, 18, 4);
    println!("viewport crop -> {} cells, extent {:?}", viewport.len(), viewport.bounds());
    render(&viewport)?;
    println!();

    // Diff answers "what changed?" between two frames
    let delta = &composed - &base;
    println!("frame delta -> {} cells (just the banner)", delta.len());
    render(&delta)?;

    Ok(())
}
