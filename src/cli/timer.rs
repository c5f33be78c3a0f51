use std::{io::Write, sync::Arc};

use anyhow::{Result, bail};
use plateup_recipe::StepChecklist;
use plateup_timer::{TimerHandle, format_clock};
use tokio::sync::Notify;

use super::App;

/// Counts down step `step` (one-based) of a recipe until it completes or
/// Ctrl-C is pressed. Running a step's timer assumes the steps before it are
/// done.
#[tracing::instrument(skip(app))]
pub async fn timer(app: &App, id: u32, step: usize) -> Result<()> {
    let recipe = app.recipe(id)?;
    let total = recipe.steps.len();

    let Some(index) = step.checked_sub(1).filter(|index| *index < total) else {
        bail!("{} has {total} steps, there is no step {step}", recipe.name);
    };

    let current = &recipe.steps[index];
    if current.timer == 0 {
        println!("Step {step} of {} has no timer.", recipe.name);
        return Ok(());
    }

    let mut checklist = StepChecklist::for_recipe(recipe);
    for previous in 0..index {
        checklist.complete(previous)?;
    }

    println!("Step {step}/{total}: {}", current.instruction);

    let done = Arc::new(Notify::new());
    let mut handle = {
        let done = done.clone();
        TimerHandle::new(current.timer, move || done.notify_one())
    };
    let mut updates = handle.subscribe();

    handle.start()?;
    print_clock(handle.snapshot().remaining)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = done.notified() => break,
            changed = updates.changed() => {
                changed?;
                let remaining = updates.borrow_and_update().remaining;
                print_clock(remaining)?;
            }
            signal = &mut ctrl_c => {
                signal?;
                handle.pause()?;
                println!("\nTimer stopped with {} left.", format_clock(handle.snapshot().remaining));
                return Ok(());
            }
        }
    }

    print_clock(0)?;
    checklist.complete(index)?;

    println!(
        "\nStep {step} done ({}/{} steps completed).",
        checklist.completed_count(),
        checklist.total()
    );

    if checklist.is_finished() {
        println!("All steps completed, enjoy your {}!", recipe.name);
    }

    Ok(())
}

fn print_clock(remaining: u32) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\r{}", format_clock(remaining))?;
    stdout.flush()?;

    Ok(())
}
