//! Example 01: Basic Store Operations
//!
//! This example walks through the task lifecycle: create, toggle, rename
//! through the edit flow, and bulk-clear completed tasks.
//!
//! Run with: cargo run --example 01_basic_ops

use eyre::Result;
use todostore::{EditMode, TaskStore};

fn main() -> Result<()> {
    println!("TodoStore Basic Operations Example");
    println!("==================================\n");

    let mut store = TaskStore::new();

    // CREATE: ids are assigned strictly increasing from 0
    println!("1. CREATE - Adding tasks...");
    let milk = store.create_task("buy milk");
    let car = store.create_task("wash car");
    println!("   Created tasks with ids {} and {}\n", milk, car);

    // TOGGLE: flip completion on one of them
    println!("2. TOGGLE - Completing '{}'...", store.tasks()[0].name);
    store.toggle_task(milk);
    println!(
        "   {} of {} completed\n",
        store.completed_count(),
        store.total_count()
    );

    // EDIT: enter edit mode, submit the new name, mode resets afterwards
    println!("3. EDIT - Renaming task {}...", car);
    store.set_edit_mode(EditMode::Edit);
    store.set_target_id(Some(car));
    println!("   Submit label is now: {}", store.submit_label());
    store.submit("wash the car properly");
    println!("   New name: {}", store.tasks()[1].name);
    println!("   Submit label is back to: {}\n", store.submit_label());

    // CLEAR: drop every completed task
    println!("4. CLEAR - Removing completed tasks...");
    let removed = store.clear_completed();
    println!("   Removed {} task(s), {} remain\n", removed, store.total_count());

    // SNAPSHOT: the debug view of all state fields
    println!("5. SNAPSHOT - Store state as JSON:");
    println!("   {}", store.snapshot_json()?);

    println!("\nExample complete!");
    Ok(())
}
