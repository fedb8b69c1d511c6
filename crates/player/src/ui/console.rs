//! Line-oriented console front end: command parsing and status rendering.

use std::fmt::Write as _;
use std::str::FromStr;

use rlrpg_domain::{DomainError, JobClass, TaskId};

use super::presentation::{character_image_path, WidgetView};

pub const HELP: &str = "\
Commands:
  start              start the timer
  stop               stop the timer
  toggle-timer       start or stop the timer
  status             show progress and tasks
  class <name>       switch job class (Swordsman, Archer, Mage, Thief, Acolyte, Merchant)
  add <name...>      add a task
  done <id>          toggle a task's completion
  rm <id>            delete a task
  goal <minutes>     set the daily goal
  save               save now
  reset-daily        zero today's minutes and levels gained
  reset-all          stop the timer and zero all tracked time
  help               show this help
  quit               save and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    ToggleTimer,
    Status,
    Class(JobClass),
    Add(String),
    Done(TaskId),
    Remove(TaskId),
    Goal(u32),
    Save,
    ResetDaily,
    ResetAll,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "stop" => Command::Stop,
            "toggle-timer" | "toggle" => Command::ToggleTimer,
            "status" | "" => Command::Status,
            "class" => Command::Class(required(rest, "class")?.parse()?),
            "add" => Command::Add(rest.to_string()),
            "done" => Command::Done(required(rest, "done")?.parse()?),
            "rm" => Command::Remove(required(rest, "rm")?.parse()?),
            "goal" => Command::Goal(
                required(rest, "goal")?
                    .parse()
                    .map_err(|_| DomainError::parse(format!("invalid minutes: {rest}")))?,
            ),
            "save" => Command::Save,
            "reset-daily" => Command::ResetDaily,
            "reset-all" => Command::ResetAll,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(DomainError::parse(format!("unknown command: {other}"))),
        };
        Ok(command)
    }
}

fn required<'a>(argument: &'a str, command: &str) -> Result<&'a str, DomainError> {
    if argument.is_empty() {
        Err(DomainError::parse(format!("{command} needs an argument")))
    } else {
        Ok(argument)
    }
}

fn bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn render_status(view: &WidgetView) -> String {
    let mut out = String::new();
    let timer = if view.running { "running" } else { "stopped" };

    let _ = writeln!(out, "{} ({}) - Level {}", view.job_title, view.job_class, view.level);
    let _ = writeln!(
        out,
        "  EXP   {} {}",
        bar(f64::from(view.experience_percentage), 20),
        view.experience_text
    );
    let _ = writeln!(out, "  Time  {} ({timer})", view.time_display);
    let _ = writeln!(
        out,
        "  Today {} {}/{} min, {} levels gained",
        bar(view.daily_percentage, 20),
        view.daily_minutes,
        view.daily_goal_minutes,
        view.levels_gained_today
    );
    let _ = writeln!(
        out,
        "  Next  {} at level {} ({:.0}%)",
        view.next_job_title, view.next_job_level, view.job_progress_percentage
    );
    let _ = writeln!(out, "  Image {}", view.image_path);
    if let Some(slug) = &view.next_image_slug {
        let _ = writeln!(out, "        next {}", character_image_path(slug));
    }

    if view.tasks.is_empty() {
        let _ = writeln!(out, "  No tasks");
    } else {
        let _ = writeln!(out, "  Tasks");
        for task in &view.tasks {
            let mark = if task.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "    [{mark}] {} {}", task.id, task.name);
        }
    }
    out
}
