//! Domain Services
//!
//! Pure answer selection from the registration number.

use crate::domain::entities::AnswerSheet;
use crate::domain::value_objects::QuestionParity;
use crate::error::{HiringError, HiringResult};

/// Number of trailing characters of the registration number that decide the question
pub const SUFFIX_LEN: usize = 2;

/// Answer for even registration numbers: per employee, the number of
/// same-department colleagues born later, with the department name.
pub const YOUNGER_EMPLOYEES_QUERY: &str = "SELECT e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME,
COUNT(e2.EMP_ID) AS YOUNGER_EMPLOYEES_COUNT
FROM EMPLOYEE e1
JOIN DEPARTMENT d ON e1.DEPARTMENT = d.DEPARTMENT_ID
LEFT JOIN EMPLOYEE e2 ON e2.DEPARTMENT = e1.DEPARTMENT AND e2.DOB > e1.DOB
GROUP BY e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME
ORDER BY e1.EMP_ID DESC";

/// Submitted for odd registration numbers when no answer is configured
pub const UNSPECIFIED_ODD_QUERY: &str = "-- Solution for question 1 has not been provided";

impl Default for AnswerSheet {
    fn default() -> Self {
        Self {
            even: YOUNGER_EMPLOYEES_QUERY.to_string(),
            odd: UNSPECIFIED_ODD_QUERY.to_string(),
        }
    }
}

impl AnswerSheet {
    /// Answer sheet with a caller-supplied odd-branch query
    pub fn with_odd(odd: impl Into<String>) -> Self {
        Self {
            odd: odd.into(),
            ..Default::default()
        }
    }

    pub fn answer_for(&self, parity: QuestionParity) -> &str {
        match parity {
            QuestionParity::Even => &self.even,
            QuestionParity::Odd => &self.odd,
        }
    }
}

/// Whether two SQL texts are the same query up to whitespace and line layout
pub fn same_query(a: &str, b: &str) -> bool {
    a.split_whitespace().eq(b.split_whitespace())
}

/// Last [`SUFFIX_LEN`] characters of the registration number, or all of it when shorter
pub fn registration_suffix(registration_number: &str) -> &str {
    let start = registration_number
        .char_indices()
        .rev()
        .nth(SUFFIX_LEN - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &registration_number[start..]
}

/// Parse the suffix and classify it as even or odd
pub fn question_parity(registration_number: &str) -> HiringResult<QuestionParity> {
    let suffix = registration_suffix(registration_number);
    let value: i64 = suffix
        .parse()
        .map_err(|_| HiringError::InvalidRegistrationNumber {
            suffix: suffix.to_string(),
        })?;
    Ok(QuestionParity::of(value))
}

/// Select the answer for a registration number
pub fn select_answer<'a>(
    registration_number: &str,
    answers: &'a AnswerSheet,
) -> HiringResult<&'a str> {
    let parity = question_parity(registration_number)?;
    Ok(answers.answer_for(parity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_suffix() {
        assert_eq!(registration_suffix("REG12347"), "47");
        assert_eq!(registration_suffix("0322"), "22");
        assert_eq!(registration_suffix("100"), "00");
        assert_eq!(registration_suffix("42"), "42");
        assert_eq!(registration_suffix("5"), "5");
        assert_eq!(registration_suffix(""), "");
    }

    #[test]
    fn test_registration_suffix_multibyte() {
        assert_eq!(registration_suffix("番号07"), "07");
        assert_eq!(registration_suffix("7番"), "7番");
    }

    #[test]
    fn test_question_parity() {
        assert_eq!(question_parity("0322").unwrap(), QuestionParity::Even);
        assert_eq!(question_parity("0323").unwrap(), QuestionParity::Odd);
        assert_eq!(question_parity("100").unwrap(), QuestionParity::Even);
        assert_eq!(question_parity("5").unwrap(), QuestionParity::Odd);
    }

    #[test]
    fn test_question_parity_non_numeric() {
        let err = question_parity("REG12X").unwrap_err();
        assert!(matches!(
            err,
            HiringError::InvalidRegistrationNumber { ref suffix } if suffix == "2X"
        ));

        assert!(matches!(
            question_parity(""),
            Err(HiringError::InvalidRegistrationNumber { .. })
        ));
    }

    #[test]
    fn test_younger_employees_query_layout() {
        let lines: Vec<&str> = YOUNGER_EMPLOYEES_QUERY.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(
            lines[0],
            "SELECT e1.EMP_ID, e1.FIRST_NAME, e1.LAST_NAME, d.DEPARTMENT_NAME,"
        );
        assert_eq!(lines[6], "ORDER BY e1.EMP_ID DESC");
        assert!(!YOUNGER_EMPLOYEES_QUERY.ends_with('\n'));
        assert!(!YOUNGER_EMPLOYEES_QUERY.contains('\r'));
    }

    #[test]
    fn test_same_query_ignores_layout() {
        let single_line = YOUNGER_EMPLOYEES_QUERY.replace('\n', " ");
        assert!(same_query(YOUNGER_EMPLOYEES_QUERY, &single_line));
        assert!(same_query(" SELECT 1 \n", "SELECT 1"));
        assert!(!same_query(YOUNGER_EMPLOYEES_QUERY, UNSPECIFIED_ODD_QUERY));
    }

    #[test]
    fn test_answer_sheet_with_odd() {
        let sheet = AnswerSheet::with_odd("SELECT 1");
        assert_eq!(sheet.answer_for(QuestionParity::Odd), "SELECT 1");
        assert_eq!(
            sheet.answer_for(QuestionParity::Even),
            YOUNGER_EMPLOYEES_QUERY
        );
    }
}
