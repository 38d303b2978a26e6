// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wirebridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wirebridge CLI entrypoint.
//!
//! Routes one wire between two terminals and prints a blueprint code per legal route. The grid
//! is described with `--width`/`--height` plus `--block`, `--wire` and `--blueprint` for existing
//! contents.
//!
//! Use `--decode <code>` to print a blueprint as a table, or `--demo` to route the built-in
//! two-component example.

use std::error::Error;

use log::{LevelFilter, Log, Metadata, Record};
use wirebridge::format::{
    decode_blueprint_entries, encode_blueprint, entries_to_grid, grid_to_entries,
    BlueprintOptions,
};
use wirebridge::model::{Cell, CellKind, Face, Grid, GridPoint};
use wirebridge::render::{render_entries_table, render_grid_table};
use wirebridge::routing::{find_routes_with_options, SearchOptions};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --width <w> --height <h> --start <x,y,face> --end <x,y,face> [--block <x,y>]... [--wire <x,y,kind,rotation>]... [--blueprint <code>] [--limit <n>] [--max-len <n>] [--table] [--verbose]\n  {program} --demo [--limit <n>] [--table] [--verbose]\n  {program} --decode <code>\n\nFaces are N, E, S or W; y grows southwards. A terminal's face points at the first wire cell.\nWire kinds: straight, junction, corner, cross, bridge.\n--blueprint adds the buildings of an existing blueprint code; non-wire buildings block routing.\n--limit stops after <n> routes, --max-len drops routes longer than <n> cells.\n--table prints each resulting grid below its blueprint code."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Terminal {
    point: GridPoint,
    face: Face,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    decode: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    blocks: Vec<GridPoint>,
    wires: Vec<(GridPoint, Cell)>,
    blueprint: Option<String>,
    start: Option<Terminal>,
    end: Option<Terminal>,
    limit: Option<usize>,
    max_len: Option<usize>,
    table: bool,
    verbose: bool,
}

fn split_fields<const N: usize>(raw: &str) -> Option<[&str; N]> {
    let mut fields = [""; N];
    let mut parts = raw.split(',');
    for field in &mut fields {
        *field = parts.next()?.trim();
    }
    parts.next().is_none().then_some(fields)
}

fn parse_point(raw: &str) -> Option<GridPoint> {
    let [x, y] = split_fields::<2>(raw)?;
    Some(GridPoint::new(x.parse().ok()?, y.parse().ok()?))
}

fn parse_terminal(raw: &str) -> Option<Terminal> {
    let [x, y, face] = split_fields::<3>(raw)?;
    Some(Terminal {
        point: GridPoint::new(x.parse().ok()?, y.parse().ok()?),
        face: face.parse().ok()?,
    })
}

fn parse_wire_kind(raw: &str) -> Option<CellKind> {
    match raw.to_ascii_lowercase().as_str() {
        "straight" => Some(CellKind::StraightWire),
        "junction" => Some(CellKind::JunctionWire),
        "corner" => Some(CellKind::CornerWire),
        "cross" => Some(CellKind::CrossWire),
        "bridge" => Some(CellKind::BridgeWire),
        _ => None,
    }
}

fn parse_wire(raw: &str) -> Option<(GridPoint, Cell)> {
    let [x, y, kind, rotation] = split_fields::<4>(raw)?;
    let rotation: u8 = rotation.parse().ok()?;
    if rotation > 3 {
        return None;
    }
    let point = GridPoint::new(x.parse().ok()?, y.parse().ok()?);
    Some((point, Cell::new(parse_wire_kind(kind)?, rotation)))
}

fn set_once<T>(slot: &mut Option<T>, value: Option<T>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--table" => {
                if options.table {
                    return Err(());
                }
                options.table = true;
            }
            "--verbose" | "-v" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "--decode" => set_once(&mut options.decode, args.next())?,
            "--blueprint" => set_once(&mut options.blueprint, args.next())?,
            "--width" => {
                let value = args.next().and_then(|raw| raw.parse().ok());
                set_once(&mut options.width, value)?;
            }
            "--height" => {
                let value = args.next().and_then(|raw| raw.parse().ok());
                set_once(&mut options.height, value)?;
            }
            "--limit" => {
                let value = args.next().and_then(|raw| raw.parse().ok());
                set_once(&mut options.limit, value)?;
            }
            "--max-len" => {
                let value = args.next().and_then(|raw| raw.parse().ok());
                set_once(&mut options.max_len, value)?;
            }
            "--start" => {
                let terminal = args.next().as_deref().and_then(parse_terminal);
                set_once(&mut options.start, terminal)?;
            }
            "--end" => {
                let terminal = args.next().as_deref().and_then(parse_terminal);
                set_once(&mut options.end, terminal)?;
            }
            "--block" => {
                let point = args.next().as_deref().and_then(parse_point).ok_or(())?;
                options.blocks.push(point);
            }
            "--wire" => {
                let wire = args.next().as_deref().and_then(parse_wire).ok_or(())?;
                options.wires.push(wire);
            }
            _ => return Err(()),
        }
    }

    let describes_grid = options.width.is_some()
        || options.height.is_some()
        || options.start.is_some()
        || options.end.is_some()
        || options.blueprint.is_some()
        || !options.blocks.is_empty()
        || !options.wires.is_empty();

    if options.decode.is_some() {
        let other = options.demo
            || describes_grid
            || options.limit.is_some()
            || options.max_len.is_some()
            || options.table;
        return if other { Err(()) } else { Ok(options) };
    }

    if options.demo {
        return if describes_grid { Err(()) } else { Ok(options) };
    }

    let complete = options.width.is_some()
        && options.height.is_some()
        && options.start.is_some()
        && options.end.is_some();
    if !complete {
        return Err(());
    }

    Ok(options)
}

/// Writes log records to stderr; installed only for `--verbose`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with("wirebridge")
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("wirebridge: [{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

fn demo_grid() -> Result<(Grid, Terminal, Terminal), Box<dyn Error>> {
    let mut grid = Grid::new(3, 3);
    grid.set(GridPoint::new(0, 0), Cell::blocking())?;
    grid.set(GridPoint::new(2, 2), Cell::blocking())?;
    let start = Terminal { point: GridPoint::new(0, 0), face: Face::S };
    let end = Terminal { point: GridPoint::new(2, 2), face: Face::N };
    Ok((grid, start, end))
}

fn build_grid(options: &CliOptions) -> Result<Grid, Box<dyn Error>> {
    let (Some(width), Some(height)) = (options.width, options.height) else {
        return Err("grid size is required".into());
    };

    let mut grid = match &options.blueprint {
        Some(code) => entries_to_grid(&decode_blueprint_entries(code)?, width, height)?,
        None => Grid::new(width, height),
    };
    for point in &options.blocks {
        grid.set(*point, Cell::blocking())?;
    }
    for (point, cell) in &options.wires {
        grid.set(*point, *cell)?;
    }
    Ok(grid)
}

fn run_routing(options: &CliOptions) -> Result<usize, Box<dyn Error>> {
    let (grid, start, end) = if options.demo {
        demo_grid()?
    } else {
        let (Some(start), Some(end)) = (options.start, options.end) else {
            return Err("start and end terminals are required".into());
        };
        (build_grid(options)?, start, end)
    };

    let search_options = SearchOptions { max_route_len: options.max_len };
    let search = find_routes_with_options(
        start.point,
        start.face,
        end.point,
        end.face,
        grid,
        search_options,
    )?;
    let blueprint_options = BlueprintOptions::default();

    let mut printed = 0usize;
    for layout in search.take(options.limit.unwrap_or(usize::MAX)) {
        let code = encode_blueprint(&grid_to_entries(layout.grid()), &blueprint_options)?;
        println!("{code}");
        if options.table {
            println!("{}\n", render_grid_table(layout.grid())?);
        }
        printed += 1;
    }

    log::info!("printed {printed} routes");
    Ok(printed)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "wirebridge".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.verbose);

        if let Some(code) = &options.decode {
            let entries = decode_blueprint_entries(code)?;
            println!("{}", render_entries_table(&entries)?);
            return Ok(());
        }

        if run_routing(&options)? == 0 {
            eprintln!("wirebridge: no legal route between the terminals");
            std::process::exit(1);
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("wirebridge: {err}");
        std::process::exit(1);
    }
}
