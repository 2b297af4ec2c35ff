//! Terminal visualizer for the wayfind engine.
//!
//! Watches a search unfold cell by cell: the frontier in green, visited
//! cells in blue, and the final path in yellow once found.
//!
//! Run: cargo run --bin pathwatch
//!
//! Keys: space pause/resume, tab cycle method, s single step, r reset,
//! n new random map, +/- step interval, q quit.

use std::collections::HashSet;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use wayfind_core::{GridMap, Point, mapgen};
use wayfind_engine::{Pathfinder, SearchStatus};

const DEMO_MAP: &str = "\
S...........#.......
............#.......
....######..#..###..
.........#..#..#....
.........#..#..#.G..
....#....#..#..#....
....#....#..#..####.
....#....#..#.......
....#....#..........
....#...............";

const HELP: &str = "space pause/resume | tab method | s step | r reset | n new map | +/- speed | q quit";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, Hide)?;
    let res = event_loop(&mut out);
    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    res
}

fn event_loop(out: &mut impl Write) -> io::Result<()> {
    let map = GridMap::from_sketch(DEMO_MAP).map_err(io::Error::other)?;
    let mut engine = Pathfinder::new(map).map_err(io::Error::other)?;
    let mut last = Instant::now();

    loop {
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => engine.toggle_searching(),
                    KeyCode::Tab => engine.next_method(),
                    KeyCode::Char('s') => engine.step(),
                    KeyCode::Char('r') => engine.reset(),
                    KeyCode::Char('n') => {
                        let method = engine.method();
                        let interval = engine.step_interval();
                        engine = Pathfinder::new(random_map()).map_err(io::Error::other)?;
                        engine.set_method(method);
                        engine.set_step_interval(interval);
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        let faster = engine
                            .step_interval()
                            .saturating_sub(Duration::from_millis(25));
                        engine.set_step_interval(faster);
                    }
                    KeyCode::Char('-') => {
                        let slower = engine.step_interval() + Duration::from_millis(25);
                        engine.set_step_interval(slower);
                    }
                    _ => {}
                }
            }
        }

        let now = Instant::now();
        engine.update(now - last);
        last = now;

        draw(out, &engine)?;
    }
    Ok(())
}

/// A fresh map with a quarter of its cells blocked at random.
fn random_map() -> GridMap {
    let mut map = GridMap::open(20, 10);
    mapgen::scatter(&mut map, &mut rand::rng(), 0.25);
    map
}

fn draw(out: &mut impl Write, engine: &Pathfinder<GridMap>) -> io::Result<()> {
    let map = engine.topology();
    let frontier: HashSet<Point> = engine.frontier().iter().map(|n| n.pos).collect();
    let visited: HashSet<Point> = engine.visited().iter().map(|n| n.pos).collect();
    let path = engine.final_path();
    let on_path: HashSet<Point> = path.iter().copied().collect();

    queue!(out, Clear(ClearType::All))?;
    for p in map.bounds().iter() {
        let (ch, color) = cell_face(map, p, &frontier, &visited, &on_path);
        queue!(
            out,
            MoveTo(p.x as u16, p.y as u16),
            SetForegroundColor(color),
            Print(ch)
        )?;
    }

    let hud_row = map.bounds().height() as u16 + 1;
    let mut status_line = format!(
        "{}  |  {}  |  steps: {}  |  interval: {}ms",
        engine.method(),
        engine.status(),
        engine.total_steps(),
        engine.step_interval().as_millis()
    );
    if engine.status() == SearchStatus::PathFound {
        status_line.push_str(&format!("  |  path: {} cells", path.len()));
    }
    queue!(
        out,
        ResetColor,
        MoveTo(0, hud_row),
        Clear(ClearType::CurrentLine),
        Print(status_line),
        MoveTo(0, hud_row + 1),
        Print(HELP)
    )?;
    out.flush()
}

/// Glyph and color for one cell, most significant role first.
fn cell_face(
    map: &GridMap,
    p: Point,
    frontier: &HashSet<Point>,
    visited: &HashSet<Point>,
    on_path: &HashSet<Point>,
) -> (char, Color) {
    if p == map.start() {
        ('S', Color::Cyan)
    } else if p == map.goal() {
        ('G', Color::Magenta)
    } else if !map.is_open(p) {
        ('#', Color::DarkGrey)
    } else if on_path.contains(&p) {
        ('*', Color::Yellow)
    } else if frontier.contains(&p) {
        ('o', Color::Green)
    } else if visited.contains(&p) {
        ('·', Color::Blue)
    } else {
        ('.', Color::DarkGrey)
    }
}
