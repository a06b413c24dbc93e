use clap::Parser;
use colored::Colorize;
use eyre::Result;
use std::io::{self, BufRead, Write};
use todostore::{EditMode, FilterMode, TaskStore};
use tracing::debug;

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Interactive console front end for the todostore task list")]
#[command(version)]
struct Cli {
    /// Pre-populate the list with tasks
    #[arg(long, value_name = "NAME")]
    seed: Vec<String>,

    /// Enable debug logging of store mutations
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let mut store = TaskStore::new();
    store.watch(|change| debug!(?change, "store changed"));

    for name in &cli.seed {
        store.create_task(name);
    }

    println!("todostore - type 'help' for commands");
    render(&store);

    let stdin = io::stdin();
    loop {
        // The prompt doubles as the form's submit label
        print!("{}> ", store.submit_label());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => render(&store),
            "toggle" => match rest.parse::<u64>() {
                Ok(id) => {
                    store.toggle_task(id);
                    render(&store);
                }
                Err(_) => println!("usage: toggle <id>"),
            },
            "edit" => match rest.parse::<u64>() {
                Ok(id) => {
                    store.set_edit_mode(EditMode::Edit);
                    store.set_target_id(Some(id));
                    println!("editing task {id} - submit its new name");
                }
                Err(_) => println!("usage: edit <id>"),
            },
            "filter" => match rest.parse::<FilterMode>() {
                Ok(mode) => {
                    store.set_filter_mode(mode);
                    render(&store);
                }
                Err(e) => println!("{e}"),
            },
            "clear" => {
                let removed = store.clear_completed();
                println!("removed {removed} completed task(s)");
                render(&store);
            }
            "json" => println!("{}", store.snapshot_json()?),
            // Anything else is form input: create or rename depending on mode
            _ => {
                store.submit(line);
                render(&store);
            }
        }
    }

    Ok(())
}

/// Draw the visible task list and the completion counter.
///
/// Pure function of the store's derived views; called after every mutation.
fn render(store: &TaskStore) {
    let visible = store.visible_tasks();
    if visible.is_empty() {
        println!("  (no tasks)");
    }
    for task in visible {
        let marker = if task.completed {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        let name = if task.completed {
            task.name.as_str().strikethrough()
        } else {
            task.name.as_str().normal()
        };
        println!("  {} {:>3}  {}", marker, task.id, name);
    }
    let counter = format!(
        "{} of {} Completed",
        store.completed_count(),
        store.total_count()
    );
    println!("  {} [filter: {}]", counter.as_str().bold(), store.filter_mode());
}

fn print_help() {
    println!("  <name>           create a task (or rename, while editing)");
    println!("  toggle <id>      flip a task's completion flag");
    println!("  edit <id>        start editing a task's name");
    println!("  filter <mode>    show all, completed or active tasks");
    println!("  clear            remove all completed tasks");
    println!("  list             redraw the task list");
    println!("  json             dump the store state as JSON");
    println!("  quit             exit");
}
