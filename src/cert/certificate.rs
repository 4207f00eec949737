use crate::cert::CertificateId;
use crate::utils::output::GetColumnValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

pub const ISSUER_NAME: &str = "CourseCity Academy";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CertificateError {
    #[error("Unknown issuer: {0}")]
    UnknownIssuer(String),
}

/// An issued course-completion certificate.
///
/// Fields are read-only once issued. The completion date is kept exactly as
/// the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    id: CertificateId,
    student: String,
    course: String,
    date: String,
    issuer: String,
}

impl Certificate {
    pub(crate) fn new(id: CertificateId, student: &str, course: &str, date: &str) -> Self {
        Self {
            id,
            student: student.to_string(),
            course: course.to_string(),
            date: date.to_string(),
            issuer: ISSUER_NAME.to_string(),
        }
    }

    pub fn id(&self) -> &CertificateId {
        &self.id
    }

    pub fn student(&self) -> &str {
        &self.student
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}

/// Unchecked wire form, validated on the way into [`Certificate`]
#[derive(Deserialize)]
struct CertificateRecord {
    id: CertificateId,
    student: String,
    course: String,
    date: String,
    issuer: String,
}

impl CertificateRecord {
    fn into_certificate(self) -> Result<Certificate, CertificateError> {
        if self.issuer != ISSUER_NAME {
            return Err(CertificateError::UnknownIssuer(self.issuer));
        }

        Ok(Certificate::new(
            self.id,
            &self.student,
            &self.course,
            &self.date,
        ))
    }
}

impl<'de> Deserialize<'de> for Certificate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CertificateRecord::deserialize(deserializer)?
            .into_certificate()
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Certificate #{} for {} - {}",
            self.id, self.student, self.course
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateField {
    Id,
    Student,
    Course,
    Date,
    Issuer,
}

impl CertificateField {
    pub const ALL: [CertificateField; 5] = [
        Self::Id,
        Self::Student,
        Self::Course,
        Self::Date,
        Self::Issuer,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Student => "Student",
            Self::Course => "Course",
            Self::Date => "Date",
            Self::Issuer => "Issuer",
        }
    }
}

impl GetColumnValue for Certificate {
    fn get_column_value(&self, column: &CertificateField) -> String {
        match column {
            CertificateField::Id => self.id.to_string(),
            CertificateField::Student => self.student.clone(),
            CertificateField::Course => self.course.clone(),
            CertificateField::Date => self.date.clone(),
            CertificateField::Issuer => self.issuer.clone(),
        }
    }
}
