//! Scripted walk through a grouped service list.
//!
//! Plays a fixed sequence of actions against a `ListView` and prints the
//! window after each one. Engine logs go to `browse.log`.

use std::fs::File;

use listview::{Action, FilterItem, Group, Item, ListConfig, ListView};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone)]
struct Service {
    name: &'static str,
    status: &'static str,
}

impl Item for Service {
    fn id(&self) -> String {
        self.name.to_string()
    }
}

impl FilterItem for Service {
    fn filter_value(&self) -> String {
        format!("{} {}", self.name, self.status)
    }
}

fn services(names: &[(&'static str, &'static str)]) -> Vec<Service> {
    names
        .iter()
        .map(|&(name, status)| Service { name, status })
        .collect()
}

fn print_window(view: &ListView<Service>, label: &str) {
    println!("-- {} (cursor {}, {} slots)", label, view.cursor(), view.len());
    if view.viewport().can_scroll_up() {
        println!("   ...");
    }
    for row in view.visible_rows() {
        let marker = if row.focused { '>' } else { ' ' };
        match row.item {
            None => {
                let arrow = if row.group.is_expanded() { 'v' } else { '>' };
                println!("{} {} {}", marker, arrow, row.group.title());
            }
            Some(service) => {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let text = view.highlight(&service.filter_value(), "<", ">");
                println!("{}     {} {}", marker, check, text);
            }
        }
    }
    if view.viewport().can_scroll_down() {
        println!("   ...");
    }
}

fn main() -> std::io::Result<()> {
    let log_file = File::create("browse.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut view = ListView::with_groups(
        ListConfig::new().visible(6).multiple(),
        vec![
            Group::new(
                "web",
                services(&[("nginx", "running"), ("caddy", "stopped")]),
            ),
            Group::new(
                "data",
                services(&[
                    ("postgres", "running"),
                    ("redis", "running"),
                    ("minio", "failed"),
                ]),
            ),
            Group::new("jobs", services(&[("backup", "failed"), ("cron", "running")])),
        ],
    );
    print_window(&view, "initial");

    let script = [
        Action::MoveDown,
        Action::ToggleSelection,
        Action::PageDown,
        Action::ToggleSelection,
        Action::Bottom,
        Action::CollapseAll,
        Action::MoveUp,
        Action::ToggleGroup,
    ];
    for action in script {
        view.apply(action);
        print_window(&view, &format!("{:?}", action));
    }

    view.set_query("fail");
    print_window(&view, "query \"fail\"");

    view.apply(Action::ClearQuery);
    print_window(&view, "query cleared");

    println!("selected: {:?}", view.selection().selected());
    Ok(())
}
