//! Interactive terminal front-end for the to-do list.
//!
//! A line-oriented event loop: every entered line is one user event. The
//! list view re-renders only when the store publishes a new list value,
//! which the loop observes on the list channel.

use anyhow::Result;
use std::io::Write as _;
use todoflow_app::command::Command;
use todoflow_app::components::{CreateForm, ItemControls, ListView};
use todoflow_app::TodoApp;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoflow=info,todoflow_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = TodoApp::new();
    let mut form = CreateForm::new(app.store(), app.ids());
    let controls = ItemControls::new(app.store());
    let mut view = ListView::new(app.subscribe());

    println!("todoflow - type `help` for commands");
    print!("{}", view.render());
    prompt()?;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            // The renderer is driven by the list channel, not by commands
            changed = view.changed() => {
                if !changed {
                    break;
                }
                print!("{}", view.render());
                prompt()?;
            },
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    prompt()?;
                    continue;
                }

                match line.parse::<Command>() {
                    Ok(Command::Add(text)) => {
                        form.set_input(text);
                        let id = form.submit().await;
                        println!("added #{id}");
                    },
                    Ok(Command::Toggle(id)) => controls.toggle(id).await,
                    Ok(Command::Remove(id)) => controls.remove(id).await,
                    Ok(Command::List) => {
                        print!("{}", view.render());
                        prompt()?;
                    },
                    Ok(Command::Help) => {
                        print_help();
                        prompt()?;
                    },
                    Ok(Command::Quit) => break,
                    Err(err) => {
                        println!("{err}");
                        prompt()?;
                    },
                }
            },
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  add <text>    create a new item");
    println!("  toggle <id>   flip an item's done flag");
    println!("  rm <id>       remove an item");
    println!("  list          show the current list");
    println!("  quit          leave the application");
}
