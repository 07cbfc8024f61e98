pub mod directory_view;
pub mod student_form;
pub mod student_grid;
