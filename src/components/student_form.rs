use crate::{
    directory::FormState,
    maud_conveniences::{simple_form_element, subtitle},
};
use maud::{Markup, html};

/// The add/edit form. Submitting posts the fields to the controller, which
/// decides between create and update; cancelling closes it without any call.
pub fn student_form(form: &FormState) -> Markup {
    let editing = form.editing.is_some();
    let draft = &form.draft;

    let (heading, blurb) = if editing {
        ("Edit Student", "Update the student information below.")
    } else {
        (
            "Add New Student",
            "Fill in the details to add a new student to the system.",
        )
    };
    let submit_label = match (editing, form.submitting) {
        (true, true) => "Updating...",
        (true, false) => "Update Student",
        (false, true) => "Creating...",
        (false, false) => "Add Student",
    };

    html! {
        form id="student_form" hx-post="/internal/students" hx-target="#directory" hx-swap="outerHTML" hx-disabled-elt="find button[type='submit']" class="bg-gray-800 rounded shadow-md p-6" {
            div class="md:grid md:grid-cols-3 md:gap-6" {
                div class="md:col-span-1 mb-4" {
                    (subtitle(heading))
                    p class="mt-1 text-sm text-gray-400" {(blurb)}
                }
                div class="md:col-span-2" {
                    (simple_form_element("name", "Full Name", None, Some("John Doe"), &draft.name))
                    (simple_form_element("email", "Email Address", Some("email"), Some("john@example.com"), &draft.email))
                    (simple_form_element("date_of_birth", "Date of Birth", Some("date"), None, &draft.date_of_birth))
                    (simple_form_element("section", "Section", None, Some("e.g., 2023A"), &draft.section))
                    (simple_form_element("course", "Course", None, Some("e.g., Computer Science"), &draft.course))
                }
            }

            div class="flex justify-end space-x-3" {
                button type="button" hx-post="/internal/students/cancel" hx-target="#directory" hx-swap="outerHTML" disabled[form.submitting]
                    class="bg-gray-700 hover:bg-gray-600 text-gray-300 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                    "Cancel"
                }
                button type="submit" disabled[form.submitting]
                    class="bg-indigo-600 hover:bg-indigo-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                    (submit_label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::student::StudentDraft,
        directory::tests::{ada, grace_draft},
    };

    #[test]
    fn create_mode_starts_blank() {
        let rendered = student_form(&FormState {
            editing: None,
            draft: StudentDraft::default(),
            submitting: false,
        })
        .into_string();

        assert!(rendered.contains("Add New Student"));
        assert!(rendered.contains(">Add Student<"));
        assert!(!rendered.contains("Edit Student"));
        assert_eq!(rendered.matches(" required").count(), 5);
        assert!(rendered.contains("type=\"date\""));
        assert!(rendered.contains("type=\"email\""));
    }

    #[test]
    fn edit_mode_is_seeded_from_the_record() {
        let student = ada();
        let rendered = student_form(&FormState {
            draft: StudentDraft::from(&student),
            editing: Some(student),
            submitting: false,
        })
        .into_string();

        assert!(rendered.contains("Edit Student"));
        assert!(rendered.contains("Update the student information below."));
        assert!(rendered.contains(">Update Student<"));
        assert!(rendered.contains("value=\"Ada Lovelace\""));
        assert!(rendered.contains("value=\"1815-12-10\""));
    }

    #[test]
    fn submitting_disables_the_buttons() {
        let rendered = student_form(&FormState {
            editing: None,
            draft: grace_draft(),
            submitting: true,
        })
        .into_string();

        assert!(rendered.contains("Creating..."));
        assert_eq!(rendered.matches(" disabled").count(), 2);
    }
}
