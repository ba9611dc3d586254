//! Interactive menu loop
//!
//! Each iteration prints the menu, reads one line, and either reports an
//! invalid selection or runs the chosen action. Actions print their prompt,
//! read exactly one argument line, and report success or the failure message.
//! Nothing but `X` (or running out of input) ends the loop.

use super::console::Console;
use super::errors::CommandError;
use super::input::{self, Action, Menu};
use super::messages;
use super::store::CreditBook;
use crate::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose `X`; the farewell was printed
    Exited,
    /// The input source ran dry before `X`
    InputExhausted,
}

/// Drives the credit book from console input
pub struct CreditManager<C: Console> {
    book: CreditBook,
    console: C,
    show_menu: bool,
    menu_shown: bool,
}

impl<C: Console> CreditManager<C> {
    /// Start with an empty credit book
    pub fn new(console: C) -> Self {
        Self::with_book(CreditBook::new(), console)
    }

    /// Start from an existing credit book
    pub const fn with_book(book: CreditBook, console: C) -> Self {
        Self {
            book,
            console,
            show_menu: true,
            menu_shown: false,
        }
    }

    /// Whether to print the menu before every selection (default) or only the first
    #[must_use]
    pub fn show_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Run until `X` is entered or input is exhausted
    pub fn run(&mut self) -> SessionOutcome {
        info!("Session started");
        loop {
            if self.console.is_exhausted() {
                warn!("Input exhausted before exit was requested");
                return SessionOutcome::InputExhausted;
            }
            match self.select_menu() {
                Some(Menu::Exit) => break,
                Some(Menu::Action(action)) => self.start_action(action),
                None => {}
            }
        }
        self.console.print_message(messages::EXIT);
        info!("Session ended by user");
        SessionOutcome::Exited
    }

    /// The credit book as it stands
    pub const fn book(&self) -> &CreditBook {
        &self.book
    }

    /// The console, e.g. to inspect what a test double recorded
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consume the manager, returning the book and the console
    pub fn into_parts(self) -> (CreditBook, C) {
        (self.book, self.console)
    }

    fn select_menu(&mut self) -> Option<Menu> {
        if self.show_menu || !self.menu_shown {
            self.console.print_message(&messages::menu());
            self.menu_shown = true;
        }
        let line = self.console.read_line();
        match input::parse_menu(line.as_deref()) {
            Ok(menu) => {
                debug!("Menu selected: {menu:?}");
                Some(menu)
            }
            Err(_) => {
                // End of input is reported like any bad line; `run` stops on the next pass.
                self.console.print_message(messages::INVALID_MENU);
                None
            }
        }
    }

    fn start_action(&mut self, action: Action) {
        self.console.print_message(action.prompt());
        let line = self.console.read_line();
        let result = self.apply(action, line.as_deref());
        match result {
            Ok(message) => self.console.print_message(&message),
            Err(e) => {
                debug!("{action:?} failed: {e:?}");
                self.console.print_message(&e.to_string());
            }
        }
    }

    fn apply(&mut self, action: Action, line: Option<&str>) -> Result<String, CommandError> {
        match action {
            Action::AddStudent => {
                let name = input::parse_student_name(line)?;
                self.book.add_student(&name)?;
                Ok(messages::student_added(&name))
            }
            Action::DeleteStudent => {
                let name = input::parse_student_name(line)?;
                self.book.delete_student(&name)?;
                Ok(messages::student_deleted(&name))
            }
            Action::UpdateCredit => {
                let request = input::parse_credit_update(line)?;
                self.book
                    .update_credit(&request.student, &request.subject, request.grade)?;
                Ok(messages::credit_updated(
                    &request.student,
                    &request.subject,
                    request.grade,
                ))
            }
            Action::DeleteCredit => {
                let request = input::parse_credit_removal(line)?;
                self.book.delete_credit(&request.student, &request.subject)?;
                Ok(messages::credit_deleted(&request.student, &request.subject))
            }
            Action::SearchCredits => {
                let name = input::parse_student_name(line)?;
                let report = self.book.search_credits(&name)?;
                Ok(messages::credit_report(&report.credits, report.average))
            }
        }
    }
}
