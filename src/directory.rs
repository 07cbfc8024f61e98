//! The page controller: the one authoritative snapshot of the students
//! collection plus which view of it is showing.
//!
//! [`Page`] is the synchronous state machine, [`Directory`] drives it against a
//! [`StudentsApi`]. The lock on the page is never held across a network call, so
//! other requests can observe `Loading` or a submitting form while one is in flight.

use crate::{
    api::StudentsApi,
    data::student::{NewStudent, RollNo, Student, StudentDraft, StudentPatch},
    error::DirectoryResult,
};
use tokio::sync::Mutex;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load students. Please try again later.";
pub const BUSY_MESSAGE: &str = "The directory is busy with another change. Please try again.";
pub const FORM_CLOSED_MESSAGE: &str = "The form was closed before it could be saved. Please try again.";
pub const FORM_OPEN_MESSAGE: &str = "Close the form before deleting a student.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// The record being edited, `None` when adding a new student.
    pub editing: Option<Student>,
    pub draft: StudentDraft,
    pub submitting: bool,
}

impl FormState {
    pub fn roll_no(&self) -> Option<RollNo> {
        self.editing.as_ref().map(|student| student.roll_no)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    List,
    Form(FormState),
}

/// What a form submission turns into once it passes the required-field gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewStudent),
    Update(RollNo, StudentPatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    students: Vec<Student>,
    view: View,
    error: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            view: View::Loading,
            error: None,
        }
    }
}

impl Page {
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub const fn view(&self) -> &View {
        &self.view
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, roll_no: RollNo) -> Option<&Student> {
        self.students.iter().find(|student| student.roll_no == roll_no)
    }

    pub fn begin_load(&mut self) {
        self.view = View::Loading;
        self.error = None;
    }

    /// Swaps in a fresh snapshot. A failed fetch leaves an empty collection, never a stale one.
    pub fn finish_load(&mut self, result: Result<Vec<Student>, String>) {
        match result {
            Ok(students) => self.students = students,
            Err(message) => {
                self.students.clear();
                self.error = Some(message);
            }
        }
        self.view = View::List;
    }

    /// Opens an empty form. Valid from the list or from an idle form.
    pub fn open_add(&mut self) -> bool {
        if !self.accepts_navigation() {
            return self.refuse(BUSY_MESSAGE);
        }
        self.view = View::Form(FormState {
            editing: None,
            draft: StudentDraft::default(),
            submitting: false,
        });
        true
    }

    pub fn open_edit(&mut self, student: Student) -> bool {
        if !self.accepts_navigation() {
            return self.refuse(BUSY_MESSAGE);
        }
        self.view = View::Form(FormState {
            draft: StudentDraft::from(&student),
            editing: Some(student),
            submitting: false,
        });
        true
    }

    /// Closing a form that is already closed is a no-op.
    pub fn cancel(&mut self) -> bool {
        let submitting = match &self.view {
            View::Form(form) => form.submitting,
            View::Loading | View::List => return false,
        };
        if submitting {
            return self.refuse(BUSY_MESSAGE);
        }
        self.view = View::List;
        true
    }

    /// Records the submitted values and, if every field is filled in, marks the
    /// form as submitting and says which remote call to make.
    pub fn begin_submit(&mut self, draft: StudentDraft) -> Option<Submission> {
        let refusal = match &self.view {
            View::Form(form) if !form.submitting => None,
            View::List => Some(FORM_CLOSED_MESSAGE),
            View::Form(_) | View::Loading => Some(BUSY_MESSAGE),
        };
        if let Some(refusal) = refusal {
            self.refuse(refusal);
            return None;
        }
        let View::Form(form) = &mut self.view else {
            return None;
        };

        form.draft = draft;
        let new_student = match form.draft.to_new_student() {
            Ok(new_student) => new_student,
            Err(problem) => {
                self.error = Some(problem.to_string());
                return None;
            }
        };

        form.submitting = true;
        self.error = None;
        Some(match form.roll_no() {
            Some(roll_no) => Submission::Update(roll_no, new_student.into()),
            None => Submission::Create(new_student),
        })
    }

    pub fn submit_failed(&mut self, message: String) {
        if let View::Form(form) = &mut self.view {
            form.submitting = false;
        }
        self.error = Some(message);
    }

    /// Closes the form; the caller re-fetches straight after.
    pub fn submit_succeeded(&mut self) {
        self.error = None;
        self.view = View::Loading;
    }

    /// Deletes only go ahead from the list.
    pub fn begin_delete(&mut self) -> bool {
        let refusal = match &self.view {
            View::List => return true,
            View::Form(form) if !form.submitting => FORM_OPEN_MESSAGE,
            View::Form(_) | View::Loading => BUSY_MESSAGE,
        };
        self.refuse(refusal)
    }

    pub fn delete_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Shows a failure without changing the view, e.g. an edit of a record that has vanished.
    pub fn report(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Turns away an event the current view can't take, saying why.
    fn refuse(&mut self, message: &str) -> bool {
        debug!(view = ?self.view, message, "refusing event");
        self.error = Some(message.to_string());
        false
    }

    fn accepts_navigation(&self) -> bool {
        match &self.view {
            View::Loading => false,
            View::List => true,
            View::Form(form) => !form.submitting,
        }
    }
}

/// Owns the [`Page`] and performs the remote calls its transitions ask for,
/// re-fetching the whole collection after every successful write.
#[derive(Debug)]
pub struct Directory<A> {
    api: A,
    page: Mutex<Page>,
}

impl<A: StudentsApi> Directory<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            page: Mutex::new(Page::default()),
        }
    }

    pub async fn page(&self) -> Page {
        self.page.lock().await.clone()
    }

    pub async fn refresh(&self) {
        self.page.lock().await.begin_load();

        let result = self.api.list_all().await.map_err(|e| {
            error!(?e, "Error fetching students");
            LOAD_FAILED_MESSAGE.to_string()
        });
        if let Ok(students) = &result {
            debug!(count = students.len(), "fetched students");
        }

        self.page.lock().await.finish_load(result);
    }

    pub async fn open_add(&self) {
        self.page.lock().await.open_add();
    }

    /// Prefers the record from the current snapshot, falling back to reading it
    /// from the service when the snapshot no longer holds it.
    pub async fn open_edit(&self, roll_no: RollNo) {
        let known = {
            let mut page = self.page.lock().await;
            if !page.accepts_navigation() {
                page.refuse(BUSY_MESSAGE);
                return;
            }
            page.find(roll_no).cloned()
        };

        let student = match known {
            Some(student) => student,
            None => match self.api.get_one(roll_no).await {
                Ok(student) => student,
                Err(e) => {
                    warn!(?e, roll_no, "Error fetching student to edit");
                    self.page.lock().await.report(e.to_string());
                    return;
                }
            },
        };

        self.page.lock().await.open_edit(student);
    }

    pub async fn cancel(&self) {
        self.page.lock().await.cancel();
    }

    pub async fn submit(&self, draft: StudentDraft) {
        let Some(submission) = self.page.lock().await.begin_submit(draft) else {
            return;
        };

        let result = self.send_submission(&submission).await;
        match result {
            Ok(student) => {
                info!(roll_no = student.roll_no, "saved student");
                self.page.lock().await.submit_succeeded();
                self.refresh().await;
            }
            Err(e) => {
                warn!(?e, status = ?e.remote_status(), "Error saving student");
                self.page.lock().await.submit_failed(e.to_string());
            }
        }
    }

    async fn send_submission(&self, submission: &Submission) -> DirectoryResult<Student> {
        match submission {
            Submission::Create(new_student) => self.api.create(new_student).await,
            Submission::Update(roll_no, patch) => self.api.update(*roll_no, patch).await,
        }
    }

    /// Confirmation already happened in the browser by the time this runs.
    pub async fn delete(&self, roll_no: RollNo) {
        if !self.page.lock().await.begin_delete() {
            return;
        }

        match self.api.delete(roll_no).await {
            Ok(()) => {
                info!(roll_no, "deleted student");
                self.refresh().await;
            }
            Err(e) => {
                warn!(?e, roll_no, "Error deleting student");
                self.page.lock().await.delete_failed(e.to_string());
            }
        }
    }
}
