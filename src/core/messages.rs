//! Fixed console text: menu, prompts, confirmations

use super::input::{Action, Menu};
use super::models::{Grade, Subject};
use std::fmt::Write;

/// Header printed above the menu entries
pub const SELECT_MENU: &str = "Please choose a menu option";
/// Printed when the menu line is not a known code
pub const INVALID_MENU: &str =
    "Something went wrong with your input. Please enter a number from 1 to 5 or X.";
/// Prompt for "add student"
pub const PROMPT_ADD_STUDENT: &str = "Enter the name of the student to add";
/// Prompt for "delete student"
pub const PROMPT_DELETE_STUDENT: &str = "Enter the name of the student to delete";
/// Prompt for "add/update grade"
pub const PROMPT_UPDATE_CREDIT: &str = "\
Enter the student's name, the subject name and the grade (A+, A, F, ...) separated by spaces.
Example: Mickey Swift A+
If the student already has a grade for that subject, it will be replaced.";
/// Prompt for "delete grade"
pub const PROMPT_DELETE_CREDIT: &str =
    "Enter the student's name and the subject name separated by spaces.";
/// Prompt for "view average"
pub const PROMPT_SEARCH_CREDITS: &str = "Enter the name of the student whose average you want to see.";
/// Farewell printed after `X`
pub const EXIT: &str = "Exiting the program...";

impl Action {
    /// Human-readable label shown in the menu
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AddStudent => "Add student",
            Self::DeleteStudent => "Delete student",
            Self::UpdateCredit => "Add/update grade",
            Self::DeleteCredit => "Delete grade",
            Self::SearchCredits => "View average",
        }
    }

    /// Prompt printed before reading the action's argument line
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::AddStudent => PROMPT_ADD_STUDENT,
            Self::DeleteStudent => PROMPT_DELETE_STUDENT,
            Self::UpdateCredit => PROMPT_UPDATE_CREDIT,
            Self::DeleteCredit => PROMPT_DELETE_CREDIT,
            Self::SearchCredits => PROMPT_SEARCH_CREDITS,
        }
    }
}

impl Menu {
    /// Human-readable label shown in the menu
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Action(action) => action.description(),
            Self::Exit => "Exit",
        }
    }
}

/// The full menu block: header, newline, then `code: description` pairs
#[must_use]
pub fn menu() -> String {
    let entries: Vec<String> = Menu::ALL
        .iter()
        .map(|menu| format!("{}: {}", menu.code(), menu.description()))
        .collect();
    format!("{SELECT_MENU}\n{}", entries.join(", "))
}

/// Confirmation after a student was added
#[must_use]
pub fn student_added(name: &str) -> String {
    format!("Added student {name}.")
}

/// Confirmation after a student was deleted
#[must_use]
pub fn student_deleted(name: &str) -> String {
    format!("Deleted student {name}.")
}

/// Confirmation after a grade was recorded or replaced
#[must_use]
pub fn credit_updated(student: &str, subject: &str, grade: Grade) -> String {
    format!("{student}'s {subject} grade was set to {grade}.")
}

/// Confirmation after a grade was removed
#[must_use]
pub fn credit_deleted(student: &str, subject: &str) -> String {
    format!("{student}'s {subject} grade was deleted.")
}

/// Search result: one `subject: grade` line per subject, then the average.
///
/// The average uses `{:?}` so whole numbers keep their decimal point (`4.0`).
#[must_use]
pub fn credit_report(credits: &[(Subject, Grade)], average: f64) -> String {
    let mut out = String::new();
    for (subject, grade) in credits {
        let _ = writeln!(out, "{subject}: {grade}");
    }
    let _ = write!(out, "Average: {average:?}");
    out
}
