//! Greedy course selection under a credit cap
//!
//! Courses are considered largest-credit first (stable, so equal-credit
//! courses keep their input order) and each one is taken if it still fits
//! under the cap. A course that does not fit is skipped for good, but the
//! walk continues, so smaller courses after it can still be taken. This is
//! a single greedy pass, not an exact knapsack solver.

use crate::core::models::Course;
use std::fmt;

/// Choose courses whose summed credits stay within `max_credits`
///
/// # Arguments
/// * `courses` - Candidate courses, in any order
/// * `max_credits` - Credit cap (a negative or NaN cap selects nothing)
///
/// # Returns
/// The accepted courses in acceptance order (descending credits, ties in
/// input order).
#[must_use]
pub fn auto_select_courses(courses: &[Course], max_credits: f32) -> Vec<Course> {
    let mut ranked: Vec<&Course> = courses.iter().collect();
    // `sort_by` is stable
    ranked.sort_by(|a, b| b.credits().total_cmp(&a.credits()));

    let mut total = 0.0_f32;
    let mut selected = Vec::new();
    for course in ranked {
        if total + course.credits() <= max_credits {
            total += course.credits();
            selected.push(course.clone());
        }
    }
    selected
}

/// Result of a manual edit to a [`Selection`]
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The course was added
    Added,
    /// The course was removed
    Removed,
    /// The course is already part of the selection
    AlreadySelected,
    /// The course is not part of the selection
    NotSelected,
    /// Adding the course would push the total past the cap
    ExceedsCap {
        /// Total the selection would have reached
        would_total: f32,
    },
}

/// An ordered set of chosen courses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    courses: Vec<Course>,
}

impl Selection {
    /// Run [`auto_select_courses`] and wrap the result
    #[must_use]
    pub fn auto(courses: &[Course], max_credits: f32) -> Self {
        Self {
            courses: auto_select_courses(courses, max_credits),
        }
    }

    /// Chosen courses in order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Consume the selection, yielding its courses
    #[must_use]
    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }

    /// Sum of credit hours
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.courses.iter().map(Course::credits).sum()
    }

    /// Number of chosen courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether nothing is chosen
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether a course with `crn` is chosen
    #[must_use]
    pub fn contains(&self, crn: &str) -> bool {
        self.courses.iter().any(|c| c.crn() == crn)
    }

    /// Append a course if it fits under `max_credits`
    ///
    /// Only the cap is re-checked; the existing choices are left as they are.
    pub fn try_add(&mut self, course: Course, max_credits: f32) -> EditOutcome {
        if self.contains(course.crn()) {
            return EditOutcome::AlreadySelected;
        }
        let would_total = self.total_credits() + course.credits();
        if would_total > max_credits {
            return EditOutcome::ExceedsCap { would_total };
        }
        self.courses.push(course);
        EditOutcome::Added
    }

    /// Remove the course with `crn`
    pub fn remove(&mut self, crn: &str) -> EditOutcome {
        match self.courses.iter().position(|c| c.crn() == crn) {
            Some(idx) => {
                self.courses.remove(idx);
                EditOutcome::Removed
            }
            None => EditOutcome::NotSelected,
        }
    }
}

impl From<Vec<Course>> for Selection {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for course in &self.courses {
            writeln!(f, "  {course}")?;
        }
        write!(f, "  Total credits: {}", self.total_credits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses_with_credits(credits: &[f32]) -> Vec<Course> {
        credits
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Course::new(
                    format!("{}", 10000 + i),
                    format!("Course {i}"),
                    "MWF 10-11AM",
                    c,
                    "none",
                )
                .unwrap()
            })
            .collect()
    }

    fn credits_of(selected: &[Course]) -> Vec<f32> {
        selected.iter().map(Course::credits).collect()
    }

    fn total(selected: &[Course]) -> f32 {
        selected.iter().map(Course::credits).sum()
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        assert!(auto_select_courses(&[], 19.0).is_empty());
        assert!(auto_select_courses(&[], 0.0).is_empty());
    }

    #[test]
    fn test_basic_selection_stays_under_cap() {
        let courses = courses_with_credits(&[3.0, 4.0, 3.0, 3.0]);
        let selected = auto_select_courses(&courses, 19.0);

        assert_eq!(selected.len(), 4);
        assert!(total(&selected) <= 19.0);
    }

    #[test]
    fn test_single_course_over_cap_is_never_selected() {
        let courses = courses_with_credits(&[20.0]);
        assert!(auto_select_courses(&courses, 19.0).is_empty());
    }

    #[test]
    fn test_five_four_credit_courses_take_four() {
        let courses = courses_with_credits(&[4.0, 4.0, 4.0, 4.0, 4.0]);
        let selected = auto_select_courses(&courses, 19.0);

        assert_eq!(selected.len(), 4);
        assert!((total(&selected) - 16.0).abs() < f32::EPSILON);
        // The last of the tied courses is the one left out
        assert!(selected.iter().all(|c| c.crn() != "10004"));
    }

    #[test]
    fn test_sixteen_plus_three_reaches_exact_cap() {
        let courses = courses_with_credits(&[4.0, 4.0, 4.0, 4.0, 3.0]);
        let selected = auto_select_courses(&courses, 19.0);

        assert!((total(&selected) - 19.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_descending_order_with_stable_ties() {
        let courses = courses_with_credits(&[1.0, 4.0, 3.0, 4.0]);
        let selected = auto_select_courses(&courses, 19.0);

        assert_eq!(credits_of(&selected), vec![4.0, 4.0, 3.0, 1.0]);
        let crns: Vec<&str> = selected.iter().map(Course::crn).collect();
        assert_eq!(crns, vec!["10001", "10003", "10002", "10000"]);
    }

    #[test]
    fn test_largest_fitting_course_comes_first() {
        let courses = courses_with_credits(&[1.0, 4.0, 3.0]);
        let selected = auto_select_courses(&courses, 19.0);

        assert!(selected[0].credits() >= 3.0);
    }

    #[test]
    fn test_skip_is_permanent_but_smaller_courses_still_fit() {
        // 5 fits (5), 4 would make 9 > 8 so it is skipped, 3 fits (8)
        let courses = courses_with_credits(&[4.0, 3.0, 5.0]);
        let selected = auto_select_courses(&courses, 8.0);

        assert_eq!(credits_of(&selected), vec![5.0, 3.0]);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // The optimum is 4 + 4 = 8; greedy takes 5 and then neither 4 fits
        let courses = courses_with_credits(&[4.0, 4.0, 5.0]);
        let selected = auto_select_courses(&courses, 8.0);

        assert_eq!(credits_of(&selected), vec![5.0]);
    }

    #[test]
    fn test_zero_and_negative_caps() {
        let courses = courses_with_credits(&[1.0, 2.0]);
        assert!(auto_select_courses(&courses, 0.0).is_empty());
        assert!(auto_select_courses(&courses, -1.0).is_empty());
        assert!(auto_select_courses(&courses, f32::NAN).is_empty());
    }

    #[test]
    fn test_total_never_exceeds_cap() {
        let courses = courses_with_credits(&[3.0, 4.0, 1.5, 2.0, 5.0, 4.0, 1.0, 3.0]);
        for cap in 0..=30 {
            #[allow(clippy::cast_precision_loss)]
            let cap = cap as f32;
            assert!(total(&auto_select_courses(&courses, cap)) <= cap);
        }
    }

    #[test]
    fn test_try_add_rechecks_cap_only() {
        let courses = courses_with_credits(&[4.0, 4.0, 4.0, 4.0, 4.0]);
        let mut selection = Selection::auto(&courses, 19.0);
        assert_eq!(selection.len(), 4);

        let extra = courses[4].clone();
        assert_eq!(
            selection.try_add(extra.clone(), 19.0),
            EditOutcome::ExceedsCap { would_total: 20.0 }
        );

        assert_eq!(selection.remove("10000"), EditOutcome::Removed);
        assert_eq!(selection.try_add(extra, 19.0), EditOutcome::Added);
        // Appended at the end; existing order untouched
        let crns: Vec<&str> = selection.courses().iter().map(Course::crn).collect();
        assert_eq!(crns, vec!["10001", "10002", "10003", "10004"]);
    }

    #[test]
    fn test_try_add_rejects_duplicates_and_remove_unknown() {
        let courses = courses_with_credits(&[3.0]);
        let mut selection = Selection::auto(&courses, 19.0);

        assert_eq!(
            selection.try_add(courses[0].clone(), 19.0),
            EditOutcome::AlreadySelected
        );
        assert_eq!(selection.remove("99999"), EditOutcome::NotSelected);
        assert!((selection.total_credits() - 3.0).abs() < f32::EPSILON);
    }
}
