// crates/console-client/src/app.rs

use chrono::{DateTime, Local};
use console_core::{Command, Console, Event, FormField};
use tokio::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Accounts,
    OrderEntry,
    Orders,
    ExecutionLogs,
}

/// Terminal-side state wrapped around the console: which panel has focus,
/// the highlighted order row and a few counters for the header.
pub struct App {
    pub console: Console<Local>,
    pub api_root: String,

    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,
    pub selected_order_index: usize,

    // Statistics
    pub last_sync: Option<DateTime<Local>>,
    pub fetches: u64,
    pub failed_fetches: u64,
}

impl App {
    pub fn new(api_root: &str) -> Self {
        Self {
            console: Console::new(Local),
            api_root: api_root.to_string(),
            input_mode: InputMode::Normal,
            current_panel: Panel::Orders,
            should_quit: false,
            show_help: false,
            selected_order_index: 0,
            last_sync: None,
            fetches: 0,
            failed_fetches: 0,
        }
    }

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Accounts => Panel::OrderEntry,
            Panel::OrderEntry => Panel::Orders,
            Panel::Orders => Panel::ExecutionLogs,
            Panel::ExecutionLogs => Panel::Accounts,
        };
        self.sync_input_mode();
    }

    pub fn prev_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Accounts => Panel::ExecutionLogs,
            Panel::OrderEntry => Panel::Accounts,
            Panel::Orders => Panel::OrderEntry,
            Panel::ExecutionLogs => Panel::Orders,
        };
        self.sync_input_mode();
    }

    // the order entry panel always types into the form
    fn sync_input_mode(&mut self) {
        self.input_mode = if self.current_panel == Panel::OrderEntry {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    pub fn start_order_entry(&mut self) {
        self.current_panel = Panel::OrderEntry;
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_input(&mut self) {
        self.current_panel = Panel::Orders;
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_order_type(&mut self) {
        self.console.form_mut().toggle_order_type();
    }

    pub fn enter_char(&mut self, c: char) {
        self.console.form_mut().enter_char(c);
    }

    pub fn delete_char(&mut self) {
        self.console.form_mut().delete_char();
    }

    /// Left/Right on a choice field of the form.
    pub fn cycle_choice(&mut self, forward: bool) {
        match self.console.form().focus() {
            FormField::Account => self.console.cycle_account(forward),
            FormField::Type => self.console.form_mut().toggle_order_type(),
            FormField::Side => self.console.form_mut().toggle_side(),
            FormField::Symbol | FormField::Quantity | FormField::LimitPrice => {}
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.current_panel {
            Panel::OrderEntry => self.console.form_mut().focus_prev(),
            Panel::Orders => {
                self.selected_order_index = self.selected_order_index.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.current_panel {
            Panel::OrderEntry => self.console.form_mut().focus_next(),
            Panel::Orders => {
                if self.selected_order_index + 1 < self.console.order_count() {
                    self.selected_order_index += 1;
                }
            }
            _ => {}
        }
    }

    pub fn submit_order(&mut self, now: Instant) -> Vec<Command> {
        self.console.submit(now).into_iter().collect()
    }

    pub fn cancel_selected_order(&mut self) -> Vec<Command> {
        self.console
            .cancel_order(self.selected_order_index)
            .into_iter()
            .collect()
    }

    pub fn refresh(&mut self) -> Vec<Command> {
        self.console.refresh_all()
    }

    pub fn tick(&mut self) -> Vec<Command> {
        self.console.tick()
    }

    pub fn handle_event(&mut self, event: Event, now: Instant) -> Vec<Command> {
        if let Event::Fetched(_, result) = &event {
            self.fetches += 1;
            if result.is_err() {
                self.failed_fetches += 1;
            }
            self.last_sync = Some(Local::now());
        }

        let commands = self.console.handle(event, now);

        let rows = self.console.order_count();
        if self.selected_order_index >= rows {
            self.selected_order_index = rows.saturating_sub(1);
        }
        commands
    }
}
