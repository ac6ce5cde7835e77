//! Canvas App - interactive shell for the shape canvas editor
//!
//! A thin collaborator around the edit engine: it parses and validates
//! typed input, hands the engine fully constructed commands, and renders
//! the returned events as text. No domain logic lives here.

use anyhow::Result;
use clap::Parser;
use edit_engine::{CanvasCommand, CanvasEngine, EditError, EditEvent};
use scene_model::{Shape, ShapeId, ShapeKind};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Interactive shape canvas editor with undo/redo
#[derive(Parser)]
#[command(name = "canvas-app")]
#[command(about = "In-memory shape canvas editor")]
struct Cli {
    /// Log filter directive (tracing EnvFilter syntax); logs go to stderr
    #[arg(long, default_value = "warn")]
    log_filter: String,

    /// Maximum number of undoable commands kept in history
    #[arg(long, default_value_t = 100)]
    max_history: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut engine = CanvasEngine::with_history_limit(cli.max_history);
    run(&mut engine, &mut input)
}

fn run(engine: &mut CanvasEngine, input: &mut impl BufRead) -> Result<()> {
    loop {
        print_menu()?;
        let Some(option) = read_line(input)? else {
            break;
        };
        match option.as_str() {
            "1" => add_shape(engine, input, false)?,
            "2" => add_shape(engine, input, true)?,
            "3" => remove_shape(engine, input)?,
            "4" => display_canvas(engine),
            "5" => display_container(engine, input)?,
            "6" => draw_canvas(engine),
            "7" => report(engine.undo()),
            "8" => report(engine.redo()),
            "9" => break,
            _ => println!("Invalid option."),
        }
    }
    Ok(())
}

fn print_menu() -> Result<()> {
    println!("Choose an option:");
    println!("1. Add shape to canvas");
    println!("2. Add shape inside another shape");
    println!("3. Remove shape from canvas");
    println!("4. Display canvas");
    println!("5. Display shapes inside a shape");
    println!("6. Draw canvas");
    println!("7. Undo");
    println!("8. Redo");
    println!("9. Exit");
    print!("Enter option number: ");
    io::stdout().flush()?;
    Ok(())
}

/// Read one trimmed line; `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a shape kind and id; `None` if the input was invalid or ended.
fn read_shape(input: &mut impl BufRead) -> Result<Option<Shape>> {
    println!("Enter shape type (rectangle/circle/square/oval/triangle):");
    let Some(word) = read_line(input)? else {
        return Ok(None);
    };
    let kind: ShapeKind = match word.parse() {
        Ok(kind) => kind,
        Err(_) => {
            println!("Invalid shape type.");
            return Ok(None);
        }
    };

    println!("Enter shape ID:");
    let Some(id) = read_shape_id(input)? else {
        return Ok(None);
    };
    Ok(Some(Shape::new(kind, id.as_i64())))
}

fn read_shape_id(input: &mut impl BufRead) -> Result<Option<ShapeId>> {
    let Some(raw) = read_line(input)? else {
        return Ok(None);
    };
    match raw.parse::<i64>() {
        Ok(id) => Ok(Some(ShapeId::new(id))),
        Err(_) => {
            println!("Invalid shape ID.");
            Ok(None)
        }
    }
}

fn add_shape(engine: &mut CanvasEngine, input: &mut impl BufRead, nested: bool) -> Result<()> {
    let Some(shape) = read_shape(input)? else {
        return Ok(());
    };

    let command = if nested {
        println!("Enter the ID of the shape in which you want to add this shape (or press Enter to add to canvas):");
        let Some(raw) = read_line(input)? else {
            return Ok(());
        };
        if raw.is_empty() {
            CanvasCommand::add(shape)
        } else {
            match raw.parse::<i64>() {
                Ok(parent_id) => CanvasCommand::add_inside(shape, ShapeId::new(parent_id)),
                Err(_) => {
                    println!("Invalid shape ID.");
                    return Ok(());
                }
            }
        }
    } else {
        CanvasCommand::add(shape)
    };

    println!("{}", engine.execute(command));
    Ok(())
}

fn remove_shape(engine: &mut CanvasEngine, input: &mut impl BufRead) -> Result<()> {
    println!("Enter the ID of the shape you want to remove:");
    let Some(id) = read_shape_id(input)? else {
        return Ok(());
    };
    println!("{}", engine.execute(CanvasCommand::remove(id)));
    Ok(())
}

fn display_canvas(engine: &CanvasEngine) {
    println!("Shapes on Canvas:");
    for (kind, id) in engine.canvas().display() {
        println!("- {kind} {id}");
    }
}

fn display_container(engine: &CanvasEngine, input: &mut impl BufRead) -> Result<()> {
    println!("Enter the ID of the shape to display:");
    let Some(id) = read_shape_id(input)? else {
        return Ok(());
    };
    match engine.canvas().find_by_id(id) {
        Ok(shape) => {
            println!("Shapes inside {} {}:", shape.kind(), shape.id());
            for (kind, id) in shape.display() {
                println!("- {kind} {id}");
            }
        }
        Err(err) => println!("{err}."),
    }
    Ok(())
}

fn draw_canvas(engine: &CanvasEngine) {
    for (kind, id) in engine.canvas().draw_events() {
        println!("{kind} {id} drawn.");
    }
}

fn report(result: Result<EditEvent, EditError>) {
    match result {
        Ok(event) => println!("{event}"),
        Err(EditError::UndoStackEmpty) => println!("Nothing to undo."),
        Err(EditError::RedoStackEmpty) => println!("Nothing to redo."),
    }
}
