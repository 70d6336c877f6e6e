use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use adv_engine::{EngineConfig, GameEngine};

pub fn run(
    path: Option<&Path>,
    show_exits: bool,
    record_history: bool,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let world = super::load_world(path)?;
    let config = EngineConfig::new()
        .with_exits(show_exits)
        .with_history(record_history);
    let mut engine = GameEngine::with_config(world, config).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut engine, stdin.lock(), stdout.lock())?;

    if let Some(path) = transcript {
        let json = serde_json::to_string_pretty(engine.history())
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        tracing::debug!(
            path = %path.display(),
            entries = engine.history().len(),
            "writing transcript"
        );
        std::fs::write(path, json)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Transcript written to {}", path.display());
    }

    Ok(())
}

fn play(engine: &mut GameEngine, mut reader: impl BufRead, mut out: impl Write) -> Result<(), String> {
    let io_err = |e: io::Error| e.to_string();

    writeln!(out, "{}\n", engine.welcome()).map_err(io_err)?;
    writeln!(out, "  Enter a number to choose, 'r' to reset, 'h' for history, 'q' to quit.\n")
        .map_err(io_err)?;

    let mut line = String::new();
    loop {
        let status = engine.snapshot();
        writeln!(
            out,
            "{} Inventory: {} items",
            format!("[{}]", status.room_name).bold(),
            status.inventory_count
        )
        .map_err(io_err)?;

        let choices = engine.available_choices();
        for (n, choice) in choices.iter().enumerate() {
            let label = if choice.locked {
                choice.text.red().to_string()
            } else {
                choice.text.clone()
            };
            writeln!(out, "  {}. {label}", n + 1).map_err(io_err)?;
        }

        write!(out, "> ").map_err(io_err)?;
        out.flush().map_err(io_err)?;

        line.clear();
        if reader.read_line(&mut line).map_err(io_err)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => {
                engine.reset();
                writeln!(out, "\n{}\n", engine.welcome()).map_err(io_err)?;
            }
            "h" | "history" => {
                writeln!(out, "\n{}", engine.history().export_markdown(engine.world()))
                    .map_err(io_err)?;
            }
            _ => match input.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(index) if index < choices.len() => {
                    let choice = &choices[index];
                    let result = engine.execute(choice);
                    writeln!(out, "\n> {}", choice.text).map_err(io_err)?;
                    if result.success {
                        writeln!(out, "{}\n", result.message).map_err(io_err)?;
                    } else {
                        writeln!(out, "{}\n", result.message.red()).map_err(io_err)?;
                    }
                }
                _ => {
                    writeln!(
                        out,
                        "{}\n",
                        format!("Unknown input '{input}'. Enter 1-{}, r, h, or q.", choices.len())
                            .yellow()
                    )
                    .map_err(io_err)?;
                }
            },
        }
    }

    writeln!(out, "\nGoodbye!").map_err(io_err)?;
    Ok(())
}
