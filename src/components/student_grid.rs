use crate::{
    config::date_locale::DateLocaleConfig,
    data::student::Student,
    error::DirectoryResult,
    maud_conveniences::{Email, subtitle},
};
use maud::{Markup, html};

pub const EMPTY_MESSAGE: &str = "No students found";

/// Cards for every student, each with edit and delete buttons.
pub fn student_grid(students: &[Student], dates: &DateLocaleConfig) -> DirectoryResult<Markup> {
    if students.is_empty() {
        return Ok(html! {
            div class="text-center py-12" {
                (subtitle(EMPTY_MESSAGE))
                p class="mt-1 text-sm text-gray-400" {"Get started by adding a new student."}
            }
        });
    }

    Ok(html! {
        div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 p-5" {
            @for student in students {
                (student_card(student, dates)?)
            }
        }
    })
}

fn student_card(student: &Student, dates: &DateLocaleConfig) -> DirectoryResult<Markup> {
    let roll_no_vals = format!("{{\"roll_no\": {}}}", student.roll_no);
    let date_of_birth = dates.medium_ymd(student.date_of_birth)?;

    Ok(html! {
        div id={"student_" (student.roll_no)} class="flex flex-col rounded-lg shadow-md p-4 bg-gray-700 hover:bg-gray-600" {
            div class="flex items-center justify-between" {
                div {
                    h3 class="text-lg font-medium text-gray-100" {(student.name)}
                    p class="text-sm text-gray-400" {"Roll No: " (student.roll_no)}
                }
                div class="flex space-x-2" {
                    button hx-get="/internal/students/edit_form" hx-vals=(roll_no_vals) hx-target="#directory" hx-swap="outerHTML"
                        class="bg-gray-800 hover:bg-gray-900 text-gray-300 py-1 px-2 rounded" {
                        "Edit"
                    }
                    button hx-delete="/internal/students" hx-vals=(roll_no_vals) hx-target="#directory" hx-swap="outerHTML"
                        hx-confirm="Are you sure you want to delete this student?"
                        class="bg-red-600 hover:bg-red-800 py-1 px-2 rounded" {
                        "Delete"
                    }
                }
            }
            div class="mt-4 space-y-2 text-sm text-gray-300" {
                p {(Email(&student.email))}
                p {"DOB: " (date_of_birth)}
                p {"Section: " (student.section)}
                p class="line-clamp-2" {(student.course)}
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::tests::ada;

    fn dates() -> DateLocaleConfig {
        DateLocaleConfig::new("en-US".into(), "gregorian".into()).unwrap()
    }

    #[test]
    fn empty_collections_say_so() {
        let rendered = student_grid(&[], &dates()).unwrap().into_string();
        assert!(rendered.contains(EMPTY_MESSAGE));
        assert!(rendered.contains("Get started by adding a new student."));
    }

    #[test]
    fn cards_show_the_record() {
        let rendered = student_grid(&[ada()], &dates()).unwrap().into_string();

        assert!(!rendered.contains(EMPTY_MESSAGE));
        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("Roll No: 1"));
        assert!(rendered.contains("mailto:ada@example.com"));
        assert!(rendered.contains("DOB: "));
        assert!(rendered.contains("1815"));
        assert!(rendered.contains("Section: 2023A"));
        assert!(rendered.contains("Mathematics"));
    }

    #[test]
    fn edit_sends_the_roll_no_and_delete_asks_first() {
        let rendered = student_grid(&[ada()], &dates()).unwrap().into_string();

        assert!(rendered.contains("hx-get=\"/internal/students/edit_form\""));
        assert!(rendered.contains("hx-delete=\"/internal/students\""));
        assert!(rendered.contains("hx-vals=\"{&quot;roll_no&quot;: 1}\""));
        assert!(rendered.contains("hx-confirm=\"Are you sure you want to delete this student?\""));
    }
}
