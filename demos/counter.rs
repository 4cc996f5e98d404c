//! Terminal counter driven by a store.
//!
//! Commands on stdin: `+`, `-`, `reset`, `q`. Set `RUST_LOG=unistore=debug`
//! to see each dispatch.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;
use unistore::{CounterAction, CounterReducer, CounterState, Store};

fn parse_command(line: &str) -> Option<CounterAction> {
    match line.trim() {
        "+" | "inc" => Some(CounterAction::Increment),
        "-" | "dec" => Some(CounterAction::Decrement),
        "reset" => Some(CounterAction::Init),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = Store::new(CounterState::default(), CounterReducer);

    let _render = store.subscribe(|state: &CounterState| {
        println!("count: {}", state.value);
    });

    store.dispatch(CounterAction::Init)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }
        match parse_command(&line) {
            Some(action) => store.dispatch(action)?,
            None => eprintln!("unknown command {:?} (use +, -, reset, q)", line.trim()),
        }
    }

    Ok(())
}
