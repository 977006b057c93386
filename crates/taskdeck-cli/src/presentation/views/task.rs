use crate::presentation::formatters::format_due_date;
use crate::presentation::view_models::{BackendViewModel, TaskCardViewModel, TaskListViewModel};
use owo_colors::OwoColorize;
use std::fmt;

/// Text layout for the card list. Colors and strike-through live here, not
/// in the view model.
pub struct TaskListView<'a> {
    data: &'a TaskListViewModel,
}

impl<'a> TaskListView<'a> {
    pub fn new(data: &'a TaskListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for TaskListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} task(s)  backend: {}  filter: {}",
            self.data.total, self.data.backend, self.data.filter
        )?;
        writeln!(f)?;

        if self.data.cards.is_empty() {
            writeln!(f, "  No tasks found.")?;
            return Ok(());
        }

        for card in &self.data.cards {
            writeln!(f, "{}", CardView(card))?;
        }
        Ok(())
    }
}

struct CardView<'a>(&'a TaskCardViewModel);

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;

        let marker = if card.completed { "[x]" } else { "[ ]" };
        let name = if card.completed {
            card.name.strikethrough().to_string()
        } else {
            card.name.bold().to_string()
        };
        writeln!(
            f,
            "{} {}  {}  {}",
            marker,
            card.id,
            priority_badge(&card.priority),
            name
        )?;

        if !card.description.is_empty() {
            writeln!(f, "      {}", card.description)?;
        }

        write!(f, "      due {}", format_due_date(card.due_date.as_deref()))?;
        if card.completed {
            write!(f, "  {}", "done".green())?;
        }
        writeln!(f)?;

        write!(
            f,
            "      {}",
            format!(
                "toggle: taskdeck toggle {}  delete: taskdeck delete {}",
                card.id, card.id
            )
            .dimmed()
        )
    }
}

fn priority_badge(label: &str) -> String {
    match label {
        "High" => label.red().to_string(),
        "Medium" => label.yellow().to_string(),
        _ => label.green().to_string(),
    }
}

pub struct BackendView<'a> {
    data: &'a BackendViewModel,
}

impl<'a> BackendView<'a> {
    pub fn new(data: &'a BackendViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for BackendView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Backend mode: {}", self.data.mode)?;
        writeln!(f, "Remote base URL: {}", self.data.base_url)?;
        write!(f, "Local store: {}", self.data.store_path)
    }
}
