use crate::{
    components::{student_form::student_form, student_grid::student_grid},
    config::date_locale::DateLocaleConfig,
    directory::{Page, View},
    error::DirectoryResult,
    maud_conveniences::{error_banner, spinner, subtitle, title},
};
use maud::{Markup, html};

pub const LOADING_CAPTION: &str = "Loading student data...";

pub fn student_count(count: usize) -> String {
    let noun = if count == 1 { "student" } else { "students" };
    format!("{count} {noun} in total")
}

/// Spinner which fetches the collection as soon as it lands in the browser.
pub fn mounting_directory() -> Markup {
    html! {
        div id="directory" hx-get="/internal/directory" hx-trigger="load" hx-swap="outerHTML" class="w-full" {
            (spinner(LOADING_CAPTION))
        }
    }
}

/// The whole directory: header, error banner and whichever view is active.
/// Every fragment endpoint answers with this, swapped over `#directory`.
pub fn directory_view(page: &Page, dates: &DateLocaleConfig) -> DirectoryResult<Markup> {
    let students = page.students();

    Ok(html! {
        div id="directory" class="w-full" {
            div class="sm:flex sm:items-center sm:justify-between mb-8" {
                div {
                    (title("Students"))
                    p class="mt-2 text-sm text-gray-400" {(student_count(students.len()))}
                }
                button hx-get="/internal/students/new_form" hx-target="#directory" hx-swap="outerHTML"
                    class="bg-indigo-600 hover:bg-indigo-700 font-bold py-2 px-4 rounded mt-4 sm:mt-0" {
                    "Add Student"
                }
            }

            @if let Some(error) = page.error() {
                (error_banner(error))
            }

            div class="bg-gray-800 rounded shadow-md" {
                @match page.view() {
                    View::Loading => {
                        // another request is re-fetching, check back shortly
                        div hx-get="/internal/directory/view" hx-trigger="load delay:500ms" hx-target="#directory" hx-swap="outerHTML" {
                            (spinner(LOADING_CAPTION))
                        }
                    },
                    View::Form(form) => {
                        @if form.submitting {
                            // another request is saving this form
                            div hx-get="/internal/directory/view" hx-trigger="load delay:500ms" hx-target="#directory" hx-swap="outerHTML" {}
                        }
                        (student_form(form))
                    },
                    View::List => {
                        div class="px-4 py-5 border-b border-gray-700" {
                            (subtitle("Student Directory"))
                            p class="mt-1 text-sm text-gray-400" {"A list of all students in the system."}
                        }
                        (student_grid(students, dates)?)
                    },
                }
            }
        }
    })
}
