use anyhow::{Context, Result};
use clap::Parser;
use cli::{Action, Cli};
use itertools::Itertools;
use singly::{List, Match};

mod cli;
mod printer;

fn run(list: &mut List<i64>, action: Action) -> Result<()> {
    match action {
        Action::Append { value } => {
            list.append(value);
        }
        Action::Prepend { value } => {
            list.prepend(value);
        }
        Action::Insert { index, value } => {
            list.insert(index, value)
                .with_context(|| format!("cannot insert {} at index {}", value, index))?;
        }
        Action::Get { index } => {
            let node = list
                .get_by_index(index)
                .with_context(|| format!("cannot get index {}", index))?;
            println!("{}", node.value());
        }
        Action::Delete { value } => {
            list.delete(&value);
        }
        Action::DeleteIndex { index } => {
            if !list.delete_index(index) {
                log::warn!("nothing to delete at index {}", index);
            }
        }
        Action::Exists { value } => println!("{}", list.exists(&value)),
        Action::Find { all: false, value } => match list.find_first(&value) {
            Some(found) => println!("{}", found.position()),
            None => println!("{} not found", value),
        },
        Action::Find { all: true, value } => match list.find_all(&value) {
            Some(found) => println!("{}", found.iter().map(Match::position).join(" ")),
            None => println!("{} not found", value),
        },
        Action::Middle => {
            let node = list.middle().context("cannot find the middle")?;
            println!("{}", node.value());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut list = List::from(cli.values);
    log::debug!("initial list: {}", list);
    if let Some(action) = cli.action {
        run(&mut list, action)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string(&list)?);
    } else if cli.tree {
        printer::print_list(&list)?;
    } else {
        println!("{:?}", list);
    }
    Ok(())
}
