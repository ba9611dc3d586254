//! Input validation
//!
//! Turns raw console lines into typed requests. A line is split on every
//! single space, so doubled or leading spaces produce empty tokens and fail
//! validation. `None` stands for a line that never arrived.

use super::errors::InputError;
use super::models::Grade;

/// An action that reads one argument line and touches the credit book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `1`
    AddStudent,
    /// `2`
    DeleteStudent,
    /// `3`
    UpdateCredit,
    /// `4`
    DeleteCredit,
    /// `5`
    SearchCredits,
}

impl Action {
    /// The token that selects this action
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AddStudent => "1",
            Self::DeleteStudent => "2",
            Self::UpdateCredit => "3",
            Self::DeleteCredit => "4",
            Self::SearchCredits => "5",
        }
    }
}

/// A menu selection: one of the actions, or `X` to leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    /// `1` to `5`
    Action(Action),
    /// `X`
    Exit,
}

impl Menu {
    /// Every entry, in the order the menu lists them
    pub const ALL: [Self; 6] = [
        Self::Action(Action::AddStudent),
        Self::Action(Action::DeleteStudent),
        Self::Action(Action::UpdateCredit),
        Self::Action(Action::DeleteCredit),
        Self::Action(Action::SearchCredits),
        Self::Exit,
    ];

    /// The token that selects this entry
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Action(action) => action.code(),
            Self::Exit => "X",
        }
    }

    /// Match a token against the menu codes
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|menu| menu.code() == code)
    }
}

/// Arguments for "add/update grade"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditUpdate {
    /// Student name
    pub student: String,
    /// Subject name
    pub subject: String,
    /// New grade
    pub grade: Grade,
}

/// Arguments for "delete grade"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditRemoval {
    /// Student name
    pub student: String,
    /// Subject name
    pub subject: String,
}

/// Parse the menu selection line.
///
/// # Errors
/// `InvalidInput` unless the line is exactly one known menu code
pub fn parse_menu(line: Option<&str>) -> Result<Menu, InputError> {
    let [code] = tokenize::<1>(line)?;
    Menu::from_code(code).ok_or(InputError::InvalidInput)
}

/// Parse a line holding a single student name.
///
/// # Errors
/// `InvalidInput` unless the line is one non-empty alphanumeric token
pub fn parse_student_name(line: Option<&str>) -> Result<String, InputError> {
    let [name] = tokenize::<1>(line)?;
    Ok(validated_name(name)?.to_string())
}

/// Parse a `student subject grade` line.
///
/// # Errors
/// `InvalidInput` on a wrong token count, a malformed name, or an unknown grade
pub fn parse_credit_update(line: Option<&str>) -> Result<CreditUpdate, InputError> {
    let [student, subject, grade] = tokenize::<3>(line)?;
    let grade = grade.parse::<Grade>()?;
    Ok(CreditUpdate {
        student: validated_name(student)?.to_string(),
        subject: validated_name(subject)?.to_string(),
        grade,
    })
}

/// Parse a `student subject` line.
///
/// # Errors
/// `InvalidInput` on a wrong token count or a malformed name
pub fn parse_credit_removal(line: Option<&str>) -> Result<CreditRemoval, InputError> {
    let [student, subject] = tokenize::<2>(line)?;
    Ok(CreditRemoval {
        student: validated_name(student)?.to_string(),
        subject: validated_name(subject)?.to_string(),
    })
}

/// True for a non-empty token made only of ASCII letters and digits
#[must_use]
pub fn is_valid_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

fn validated_name(token: &str) -> Result<&str, InputError> {
    if is_valid_name(token) {
        Ok(token)
    } else {
        Err(InputError::InvalidInput)
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

/// Split on single spaces and require exactly `N` tokens
fn tokenize<const N: usize>(line: Option<&str>) -> Result<[&str; N], InputError> {
    let line = strip_line_ending(line.ok_or(InputError::InvalidInput)?);
    let tokens: Vec<&str> = line.split(' ').collect();
    tokens.try_into().map_err(|_| InputError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_codes() {
        assert_eq!(parse_menu(Some("1")), Ok(Menu::Action(Action::AddStudent)));
        assert_eq!(parse_menu(Some("5")), Ok(Menu::Action(Action::SearchCredits)));
        assert_eq!(parse_menu(Some("X\n")), Ok(Menu::Exit));
    }

    #[test]
    fn test_menu_rejects_everything_else() {
        for line in ["", " ", "6", "0", "x", "aa", "1 2", "X "] {
            assert_eq!(
                parse_menu(Some(line)),
                Err(InputError::InvalidInput),
                "menu line {line:?}"
            );
        }
        assert_eq!(parse_menu(None), Err(InputError::InvalidInput));
    }

    #[test]
    fn test_student_name() {
        assert_eq!(parse_student_name(Some("Mickey2\r\n")), Ok("Mickey2".to_string()));
        for line in ["", "Mickey Mouse", "Mickey!", "Mi-ckey", "Mïckey", " Mickey"] {
            assert_eq!(
                parse_student_name(Some(line)),
                Err(InputError::InvalidInput),
                "name line {line:?}"
            );
        }
        assert_eq!(parse_student_name(None), Err(InputError::InvalidInput));
    }

    #[test]
    fn test_credit_update() {
        assert_eq!(
            parse_credit_update(Some("Mickey Swift A+")),
            Ok(CreditUpdate {
                student: "Mickey".into(),
                subject: "Swift".into(),
                grade: Grade::APlus,
            })
        );
    }

    #[test]
    fn test_credit_update_accepts_every_grade_symbol() {
        for grade in Grade::ALL {
            let line = format!("Mickey Swift {grade}");
            assert_eq!(parse_credit_update(Some(&line)).map(|u| u.grade), Ok(grade));
        }
    }

    #[test]
    fn test_credit_update_rejects_bad_lines() {
        for line in [
            "Mickey",
            "Mickey Swift",
            "Mickey Swift E",
            "Mickey Swift a",
            "Mickey  Swift A",
            "Mickey Swift A extra",
            "Mickey Sw!ft A",
        ] {
            assert_eq!(
                parse_credit_update(Some(line)),
                Err(InputError::InvalidInput),
                "update line {line:?}"
            );
        }
    }

    #[test]
    fn test_credit_removal() {
        assert_eq!(
            parse_credit_removal(Some("Mickey Swift")),
            Ok(CreditRemoval {
                student: "Mickey".into(),
                subject: "Swift".into(),
            })
        );
        assert_eq!(parse_credit_removal(Some("Mickey")), Err(InputError::InvalidInput));
        assert_eq!(
            parse_credit_removal(Some("Mickey Swift A")),
            Err(InputError::InvalidInput)
        );
        assert_eq!(parse_credit_removal(Some("Mickey ")), Err(InputError::InvalidInput));
    }
}
