use jiff::civil::Date;
use serde::{Deserialize, Serialize};

pub type RollNo = i64;

/// A student the remote service has persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "roll_no")]
    pub roll_no: RollNo,
    pub name: String,
    pub email: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub section: String,
    pub course: String,
}

/// Body of a create call. There is deliberately no `roll_no`, the server assigns it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    #[serde(with = "iso_date")]
    pub date_of_birth: Date,
    pub section: String,
    pub course: String,
}

/// Body of an update call, only the present fields are sent.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso_date::serialize_option"
    )]
    pub date_of_birth: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

impl From<NewStudent> for StudentPatch {
    fn from(
        NewStudent {
            name,
            email,
            date_of_birth,
            section,
            course,
        }: NewStudent,
    ) -> Self {
        Self {
            name: Some(name),
            email: Some(email),
            date_of_birth: Some(date_of_birth),
            section: Some(section),
            course: Some(course),
        }
    }
}

/// The urlencoded body the student form posts.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub course: String,
}

/// Field text as the user currently sees it in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub section: String,
    pub course: String,
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            date_of_birth: student.date_of_birth.to_string(),
            section: student.section.clone(),
            course: student.course.clone(),
        }
    }
}

impl From<StudentForm> for StudentDraft {
    fn from(
        StudentForm {
            name,
            email,
            date_of_birth,
            section,
            course,
        }: StudentForm,
    ) -> Self {
        Self {
            name,
            email,
            date_of_birth,
            section,
            course,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftProblem {
    Missing(&'static str),
    BadDate(String),
}

impl std::fmt::Display for DraftProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(label) => write!(f, "{label} is required"),
            Self::BadDate(provided) => {
                write!(f, "Date of Birth {provided:?} is not a valid date (YYYY-MM-DD)")
            }
        }
    }
}

impl StudentDraft {
    /// Checks every field is filled in and turns the draft into a create payload.
    /// Values are sent exactly as typed, whitespace only fields count as blank.
    pub fn to_new_student(&self) -> Result<NewStudent, DraftProblem> {
        let required = |value: &str, label: &'static str| {
            if value.trim().is_empty() {
                Err(DraftProblem::Missing(label))
            } else {
                Ok(value.to_string())
            }
        };

        let name = required(&self.name, "Full Name")?;
        let email = required(&self.email, "Email Address")?;
        let date_of_birth = required(&self.date_of_birth, "Date of Birth")?;
        let section = required(&self.section, "Section")?;
        let course = required(&self.course, "Course")?;

        let date_of_birth = date_of_birth
            .trim()
            .parse::<Date>()
            .map_err(|_| DraftProblem::BadDate(date_of_birth))?;

        Ok(NewStudent {
            name,
            email,
            date_of_birth,
            section,
            course,
        })
    }
}

/// `YYYY-MM-DD` on the way out; on the way in an RFC 3339 timestamp is also
/// accepted and reduced to its UTC date.
mod iso_date {
    use jiff::{Timestamp, civil::Date, tz::TimeZone};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    #[allow(clippy::ref_option)]
    pub fn serialize_option<S: Serializer>(
        date: &Option<Date>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(date),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = raw.parse::<Date>() {
            return Ok(date);
        }
        raw.parse::<Timestamp>()
            .map(|ts| ts.to_zoned(TimeZone::UTC).date())
            .map_err(|e| D::Error::custom(format!("invalid date {raw:?}: {e}")))
    }
}
