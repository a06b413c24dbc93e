//! Example 02: Filtered Views
//!
//! This example demonstrates the derived views: how the visible task list
//! follows the filter mode while the counters stay filter-independent.
//!
//! Run with: cargo run --example 02_filter_views

use eyre::Result;
use todostore::{FilterMode, TaskStore};

fn main() -> Result<()> {
    println!("TodoStore Filtered Views Example");
    println!("================================\n");

    let mut store = TaskStore::new();

    println!("Creating sample tasks...\n");
    for name in ["write report", "book flights", "water plants", "file taxes"] {
        store.create_task(name);
    }
    store.toggle_task(1);
    store.toggle_task(2);

    for mode in [FilterMode::All, FilterMode::Completed, FilterMode::Active] {
        store.set_filter_mode(mode);

        println!("Filter '{}':", store.filter_mode());
        for task in store.visible_tasks() {
            let flag = if task.completed { "x" } else { " " };
            println!("   [{}] {:>2}  {}", flag, task.id, task.name);
        }
        println!();
    }

    // The counters read from the canonical list, not the filtered view
    println!(
        "Counter is always {} of {} Completed, whatever the filter.",
        store.completed_count(),
        store.total_count()
    );

    println!("\nExample complete!");
    Ok(())
}
