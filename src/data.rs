use serde::Deserialize;

pub mod student;

#[derive(Deserialize)]
pub struct RollNoQuery {
    pub roll_no: student::RollNo,
}
