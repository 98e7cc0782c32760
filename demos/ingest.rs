//! Ingest demo: Decode an ANSI byte stream into a sparse buffer.
//!
//! A `vt100::Parser` stands in for the terminal-state decoder upstream
//! of the buffer: it interprets escape sequences, and its screen cells
//! are fed through `Buffer::set`, the buffer's single ingestion point.

use tessera::{Buffer, Cell, Modifiers, Rgb, Style};

/// Convert ANSI color index to RGB (standard 16, 6x6x6 cube, grays).
const fn ansi_to_rgb(idx: u8) -> Rgb {
    match idx {
        0 => Rgb::new(0, 0, 0),
        1 => Rgb::new(128, 0, 0),
        2 => Rgb::new(0, 128, 0),
        3 => Rgb::new(128, 128, 0),
        4 => Rgb::new(0, 0, 128),
        5 => Rgb::new(128, 0, 128),
        6 => Rgb::new(0, 128, 128),
        7 => Rgb::new(192, 192, 192),
        8 => Rgb::new(128, 128, 128),
        9 => Rgb::new(255, 0, 0),
        10 => Rgb::new(0, 255, 0),
        11 => Rgb::new(255, 255, 0),
        12 => Rgb::new(0, 0, 255),
        13 => Rgb::new(255, 0, 255),
        14 => Rgb::new(0, 255, 255),
        15 => Rgb::new(255, 255, 255),
        16..=231 => {
            let i = idx - 16;
            let r = (i / 36) % 6;
            let g = (i / 6) % 6;
            let b = i % 6;
            Rgb::new(
                if r == 0 { 0 } else { r * 40 + 55 },
                if g == 0 { 0 } else { g * 40 + 55 },
                if b == 0 { 0 } else { b * 40 + 55 },
            )
        }
        232..=255 => {
            let v = (idx - 232) * 10 + 8;
            Rgb::new(v, v, v)
        }
    }
}

fn color_to_rgb(color: vt100::Color, default: Rgb) -> Rgb {
    match color {
        vt100::Color::Rgb(r, g, b) => Rgb::new(r, g, b),
        vt100::Color::Idx(i) => ansi_to_rgb(i),
        vt100::Color::Default => default,
    }
}

fn ingest(screen: &vt100::Screen) -> Buffer {
    let (rows, cols) = screen.size();
    let mut buf = Buffer::new();
    for row in 0..rows {
        for col in 0..cols {
            let Some(cell) = screen.cell(row, col) else {
                continue;
            };
            let contents = cell.contents();
            if contents.trim_start().is_empty() {
                continue;
            }
            let Some(ch) = contents.chars().next() else {
                continue;
            };

            let mut attrs = Modifiers::empty();
            if cell.bold() {
                attrs |= Modifiers::BOLD;
            }
            if cell.underline() {
                attrs |= Modifiers::UNDERLINE;
            }
            let style = Style::new(
                color_to_rgb(cell.fgcolor(), Rgb::DEFAULT_FG),
                color_to_rgb(cell.bgcolor(), Rgb::DEFAULT_BG),
                attrs,
            );
            buf.set(i32::from(col), i32::from(row), Cell::styled(ch, style));
        }
    }
    buf
}

fn print_glyphs(buf: &Buffer) {
    let bounds = buf.bounds();
    for y in bounds.min_y..bounds.max_y {
        let line: String = (bounds.min_x..bounds.max_x)
            .map(|x| buf.get(x, y).map_or(' ', Cell::ch))
            .collect();
        println!("  |{line}|");
    }
}

fn main() {
    println!("Tessera Ingest Demo");
    println!("===================");
    println!();

    // Canned "program output": colored status lines with cursor motion
    let captured: &[u8] = b"\x1b[1;32mOK\x1b[0m build\r\n\
        \x1b[1;31mFAIL\x1b[0m tests\r\n\
        \x1b[3;7Hretrying...";

    let mut parser = vt100::Parser::new(6, 30, 0);
    parser.process(captured);

    let snapshot = ingest(parser.screen());
    println!(
        "decoded {} styled cells, extent {:?}",
        snapshot.len(),
        snapshot.bounds()
    );
    print_glyphs(&snapshot);
    println!();

    // More bytes arrive; diff the snapshots for a minimal update
    parser.process(b"\x1b[2;1H\x1b[1;32mPASS\x1b[0m tests ");
    let next = ingest(parser.screen());
    let delta = &next - &snapshot;
    println!("after rerun: {} cells changed", delta.len());
    print_glyphs(&delta);
}
