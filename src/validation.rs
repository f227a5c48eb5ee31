//! Input validation for scheduling runs.
//!
//! Checks roster and availability integrity before scheduling. Detects:
//! - Empty student names
//! - Duplicate student names (case-insensitive)
//! - Teacher labels off the 08:00–21:30 half-hour grid
//! - Student labels off the 12:00–21:30 half-hour grid
//!
//! The scheduler never calls this: out-of-grid labels are a caller error
//! and placement simply works with whatever labels it is given.

use std::collections::HashSet;

use crate::models::{
    Availability, Day, Student, TimeLabel, GRID_LAST, STUDENT_GRID_FIRST, TEACHER_GRID_FIRST,
};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A student has a blank name.
    EmptyName,
    /// Two students share a name, ignoring case.
    DuplicateName,
    /// A teacher label is outside the teacher grid.
    TeacherTimeOffGrid,
    /// A student label is outside the student grid.
    StudentTimeOffGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the teacher calendar and roster for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(teacher: &Availability, roster: &[Student]) -> ValidationResult {
    let mut errors = Vec::new();

    for (day, time) in off_grid(teacher, TEACHER_GRID_FIRST) {
        errors.push(ValidationError::new(
            ValidationErrorKind::TeacherTimeOffGrid,
            format!("Teacher availability {day} {time} is outside 08:00-21:30 half hours"),
        ));
    }

    let mut seen = HashSet::new();
    for student in roster {
        let name = student.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Student with empty name",
            ));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate student name: {name}"),
            ));
        }

        for (day, time) in off_grid(&student.availability, STUDENT_GRID_FIRST) {
            errors.push(ValidationError::new(
                ValidationErrorKind::StudentTimeOffGrid,
                format!(
                    "Student '{}' availability {day} {time} is outside 12:00-21:30 half hours",
                    student.name
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Whether `name` would clash (case-insensitively) with a roster entry.
pub fn is_duplicate_name(roster: &[Student], name: &str) -> bool {
    let name = name.trim().to_lowercase();
    roster.iter().any(|s| s.name.trim().to_lowercase() == name)
}

fn off_grid(availability: &Availability, first: TimeLabel) -> Vec<(Day, TimeLabel)> {
    Day::ALL
        .into_iter()
        .flat_map(move |day| availability.times(day).map(move |t| (day, t)))
        .filter(|(_, t)| *t < first || *t > GRID_LAST || !t.is_half_hour_aligned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn t(s: &str) -> TimeLabel {
        s.parse().unwrap()
    }

    fn sample_teacher() -> Availability {
        Availability::new()
            .with_time(Day::Monday, t("08:00"))
            .with_time(Day::Monday, t("21:30"))
    }

    fn sample_roster() -> Vec<Student> {
        vec![
            Student::new("John Doe", Level::KidsI).with_hour(Day::Monday, t("14:00")),
            Student::new("Jane Doe", Level::KidsII).with_hour(Day::Tuesday, t("12:00")),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_roster(&sample_teacher(), &sample_roster()).is_ok());
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        let mut roster = sample_roster();
        roster.push(Student::new("JOHN DOE", Level::TeensI));

        let errors = validate_roster(&sample_teacher(), &roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
    }

    #[test]
    fn test_empty_name() {
        let roster = vec![Student::new("  ", Level::First)];
        let errors = validate_roster(&sample_teacher(), &roster).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_teacher_off_grid() {
        let teacher = sample_teacher()
            .with_time(Day::Friday, t("07:30"))
            .with_time(Day::Friday, t("10:15"));
        let errors = validate_roster(&teacher, &[]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::TeacherTimeOffGrid));
    }

    #[test]
    fn test_student_off_grid() {
        // 11:00 is fine for the teacher but not for students
        let roster = vec![Student::new("Early", Level::KidsI).with_hour(Day::Monday, t("11:00"))];
        let teacher = sample_teacher().with_time(Day::Monday, t("11:00"));

        let errors = validate_roster(&teacher, &roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::StudentTimeOffGrid);
        assert!(errors[0].message.contains("Early"));
    }

    #[test]
    fn test_multiple_errors() {
        let roster = vec![
            Student::new("", Level::KidsI),
            Student::new("Dup", Level::KidsI).with_hour(Day::Monday, t("22:00")),
            Student::new("dup", Level::KidsI),
        ];
        let errors = validate_roster(&Availability::new(), &roster).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_is_duplicate_name() {
        let roster = sample_roster();
        assert!(is_duplicate_name(&roster, "jane doe"));
        assert!(!is_duplicate_name(&roster, "Alice"));
    }
}
