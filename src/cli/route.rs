//! Navigation replay command.
//!
//! Opens a rendered page at a URL, routes it like a browser would on load,
//! then replays each step and prints how the router reacted.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use fragroute::RouterConfig;
use fragroute::dom::{History, MemoryPage};
use fragroute::log;
use fragroute::router::{Dispatched, EventOutcome, Navigation, Session, Step};

use super::RouteArgs;
use super::common::read_page;

/// One replayed step and the events it caused.
#[derive(Debug, Serialize)]
struct StepRecord {
    step: String,
    events: Vec<Dispatched>,
    /// Location after the step.
    url: String,
    title: String,
}

/// Replay `args.steps` against `args.page`
pub fn route_page(args: &RouteArgs, config: &RouterConfig) -> Result<()> {
    let steps = args
        .steps
        .iter()
        .map(|step| step.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let page = read_page(&args.page)?;
    let mut session = Session::new(config, page, &args.url)?;

    let mut records = Vec::with_capacity(steps.len() + 1);
    let events = session.load();
    records.push(record(&session, "load".to_string(), events));

    for (raw, step) in args.steps.iter().zip(&steps) {
        let events = session.run(step)?;
        records.push(record(&session, raw.clone(), events));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            print_record(record);
        }
        log!("route"; "ended at {}", session.history().location().pathname);
    }
    Ok(())
}

fn record(session: &Session<MemoryPage>, step: String, events: Vec<Dispatched>) -> StepRecord {
    StepRecord {
        step,
        events,
        url: session.history().current_url().to_string(),
        title: session.page().title().to_string(),
    }
}

fn print_record(record: &StepRecord) {
    println!("{} {}", "▶".cyan(), record.step.bold());
    for dispatched in &record.events {
        let event = format!("{:?}", dispatched.event).to_ascii_lowercase();
        match &dispatched.outcome {
            EventOutcome::Routed(nav) => {
                println!("  {} {} {}", event.dimmed(), "→".green(), describe(nav));
            }
            EventOutcome::Suppressed => println!("  {} {}", event.dimmed(), "suppressed".yellow()),
            EventOutcome::Ignored => println!("  {} {}", event.dimmed(), "ignored".dimmed()),
        }
    }
    println!("  {} {}", record.url.underline(), format!("\"{}\"", record.title).dimmed());
}

/// `about (requested xyz, fell back, replace)`
fn describe(nav: &Navigation) -> String {
    let mut notes = Vec::new();
    if nav.requested != nav.key {
        notes.push(format!("requested `{}`", nav.requested));
    }
    if nav.fell_back {
        notes.push("fell back".to_string());
    }
    if nav.pushed {
        notes.push("push".to_string());
    }
    if nav.replaced {
        notes.push("replace".to_string());
    }
    if let Some(hash) = &nav.hash {
        notes.push(format!("#{hash}"));
    }
    if let Some(sub) = &nav.scrolled_to {
        notes.push(format!("scrolled to `{sub}`"));
    }

    if notes.is_empty() {
        nav.key.clone()
    } else {
        format!("{} ({})", nav.key, notes.join(", "))
    }
}
