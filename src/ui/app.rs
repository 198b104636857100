use anyhow::Result;
use chrono::Local;

use crate::controller::Controller;
use crate::models::{Category, Item, ItemInput, ItemKey};
use crate::ui::util::{self, clamp_cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Entry,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Entry => write!(f, "ENTRY"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// Field of the entry form that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryField {
    Category,
    Description,
    Value,
}

impl EntryField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Category => Self::Description,
            Self::Description => Self::Value,
            Self::Value => Self::Category,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Category => Self::Value,
            Self::Description => Self::Category,
            Self::Value => Self::Description,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EntryForm {
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) value: String,
    pub(crate) field: EntryField,
}

impl EntryForm {
    fn new() -> Self {
        Self {
            category: Category::Income,
            description: String::new(),
            value: String::new(),
            field: EntryField::Description,
        }
    }

    /// Empty the text fields and put focus back on the description. The
    /// chosen category is kept for the next entry.
    pub(crate) fn clear(&mut self) {
        self.description.clear();
        self.value.clear();
        self.field = EntryField::Description;
    }

    /// Text buffer for the focused field, if it is a text field.
    pub(crate) fn focused_text(&mut self) -> Option<&mut String> {
        match self.field {
            EntryField::Category => None,
            EntryField::Description => Some(&mut self.description),
            EntryField::Value => Some(&mut self.value),
        }
    }
}

/// Cursor and scroll offset of one item list.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) month_label: String,

    pub(crate) controller: Controller,

    // Entry form
    pub(crate) entry: EntryForm,

    // Lists
    pub(crate) focus: Category,
    pub(crate) income_cursor: ListCursor,
    pub(crate) expense_cursor: ListCursor,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self::with_month(util::month_label(Local::now().date_naive()))
    }

    pub(crate) fn with_month(month_label: String) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month_label,

            controller: Controller::new(),

            entry: EntryForm::new(),

            focus: Category::Income,
            income_cursor: ListCursor::default(),
            expense_cursor: ListCursor::default(),

            visible_rows: 10,
        }
    }

    /// Validate the entry form and add its item. The form is cleared only
    /// when the item was accepted.
    pub(crate) fn submit_entry(&mut self) -> Result<Item> {
        let input = ItemInput::parse(
            self.entry.category,
            &self.entry.description,
            &self.entry.value,
        )?;
        let item = self.add(input);
        self.entry.clear();
        Ok(item)
    }

    pub(crate) fn add(&mut self, input: ItemInput) -> Item {
        let item = self.controller.add(input);
        self.set_status(format!("Added {} '{}'", item.key(), item.description));
        item
    }

    pub(crate) fn delete(&mut self, key: ItemKey) -> Option<Item> {
        let removed = self.controller.delete(key);
        match &removed {
            Some(item) => {
                self.set_status(format!("Deleted {key} '{}'", item.description));
                self.clamp_cursors();
            }
            None => self.set_status(format!("No such item: {key}")),
        }
        removed
    }

    pub(crate) fn delete_selected(&mut self) -> Option<Item> {
        match self.selected_key() {
            Some(key) => self.delete(key),
            None => {
                self.set_status(format!("No {} to delete", self.focus.as_str().to_lowercase()));
                None
            }
        }
    }

    pub(crate) fn selected_key(&self) -> Option<ItemKey> {
        let cursor = self.cursor(self.focus);
        self.controller
            .ledger()
            .items(self.focus)
            .get(cursor.index)
            .map(Item::key)
    }

    pub(crate) fn cursor(&self, category: Category) -> ListCursor {
        match category {
            Category::Income => self.income_cursor,
            Category::Expense => self.expense_cursor,
        }
    }

    pub(crate) fn focused_cursor_mut(&mut self) -> &mut ListCursor {
        match self.focus {
            Category::Income => &mut self.income_cursor,
            Category::Expense => &mut self.expense_cursor,
        }
    }

    pub(crate) fn focused_len(&self) -> usize {
        self.controller.ledger().items(self.focus).len()
    }

    fn clamp_cursors(&mut self) {
        let ledger = self.controller.ledger();
        let incomes = ledger.incomes().len();
        let expenses = ledger.expenses().len();
        clamp_cursor(
            &mut self.income_cursor.index,
            &mut self.income_cursor.scroll,
            incomes,
        );
        clamp_cursor(
            &mut self.expense_cursor.index,
            &mut self.expense_cursor.scroll,
            expenses,
        );
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
