use crate::{
    data::student::{NewStudent, RollNo, Student, StudentPatch},
    error::DirectoryResult,
};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

pub mod client;

/// Envelope every successful response from the student service is wrapped in.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Error bodies only matter for their `message`.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAction {
    ListAll,
    GetOne,
    Create,
    Update,
    Delete,
}

impl Display for ApiAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ListAll => "fetch students",
            Self::GetOne => "fetch student",
            Self::Create => "create student",
            Self::Update => "update student",
            Self::Delete => "delete student",
        })
    }
}

/// The remote students collection. Each call is a single attempt, failures are
/// handed straight back to the caller.
pub trait StudentsApi {
    async fn list_all(&self) -> DirectoryResult<Vec<Student>>;
    async fn get_one(&self, roll_no: RollNo) -> DirectoryResult<Student>;
    async fn create(&self, student: &NewStudent) -> DirectoryResult<Student>;
    async fn update(&self, roll_no: RollNo, patch: &StudentPatch) -> DirectoryResult<Student>;
    async fn delete(&self, roll_no: RollNo) -> DirectoryResult<()>;
}
