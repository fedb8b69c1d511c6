//! Composition root for the console widget.
//!
//! Wires the desktop platform, persistence gateway and widget service
//! together, then drives them from stdin until `quit`, EOF or Ctrl+C.

use anyhow::Result;
use rlrpg_domain::{DomainError, JobClassChange};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::services::{PersistenceGateway, WidgetController, WidgetService};
use crate::config::PlayerConfig;
use crate::infrastructure::platform::create_platform;
use crate::ui::{render_status, Command, WidgetView, HELP};

pub async fn run(config: PlayerConfig) -> Result<()> {
    let platform = create_platform(&config);
    let gateway = PersistenceGateway::new(
        platform.storage(),
        config.storage_key.clone(),
        config.daily_goal,
    );
    let service = WidgetService::load(platform, gateway);
    let mut widget = WidgetController::new(service, config.tick_interval, config.save_delay);
    tracing::info!(
        tick_ms = config.tick_interval.as_millis() as u64,
        save_delay_ms = config.save_delay.as_millis() as u64,
        "Widget ready"
    );

    println!("{HELP}\n");
    print_status(&widget).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
            line = lines.next_line() => line,
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                break;
            }
        };

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&mut widget, command).await,
            Err(e) => println!("error: {e}"),
        }
    }

    widget.shutdown().await;
    Ok(())
}

async fn dispatch(widget: &mut WidgetController, command: Command) {
    match command {
        Command::Start => match widget.start().await {
            Ok(()) => println!("Timer started"),
            Err(e) => println!("error: {e}"),
        },
        Command::Stop => match widget.stop().await {
            Ok(stopped) => println!("Timer stopped after {}s", stopped.session_seconds),
            Err(e) => println!("error: {e}"),
        },
        Command::ToggleTimer => match widget.toggle_timer().await {
            Ok(true) => println!("Timer started"),
            Ok(false) => println!("Timer stopped"),
            Err(e) => println!("error: {e}"),
        },
        Command::Status => print_status(widget).await,
        Command::Class(class) => match widget.select_job_class(class).await {
            JobClassChange::Changed { to, job_title, .. } => {
                println!("Class is now {to} ({job_title})");
            }
            JobClassChange::Unchanged { class } => println!("Already a {class}"),
        },
        Command::Add(name) => match widget.add_task(&name).await {
            Some(id) => println!("Added task {id}"),
            None => println!("error: task name is empty"),
        },
        Command::Done(id) => match widget.toggle_task(id).await {
            Some(true) => println!("Task {id} done"),
            Some(false) => println!("Task {id} reopened"),
            None => println!("error: {}", DomainError::not_found("Task", id.to_string())),
        },
        Command::Remove(id) => {
            if widget.delete_task(id).await {
                println!("Deleted task {id}");
            } else {
                println!("error: {}", DomainError::not_found("Task", id.to_string()));
            }
        }
        Command::Goal(minutes) => match widget.set_daily_goal(minutes).await {
            Ok(goal) => println!("Daily goal is now {goal}"),
            Err(e) => println!("error: {e}"),
        },
        Command::Save => {
            widget.save().await;
            println!("Saved");
        }
        Command::ResetDaily => {
            widget.reset_daily().await;
            println!("Daily progress reset");
        }
        Command::ResetAll => {
            widget.reset_all().await;
            println!("All tracked time reset");
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

async fn print_status(widget: &WidgetController) {
    let view = widget.inspect(WidgetView::from_state).await;
    print!("{}", render_status(&view));
}
