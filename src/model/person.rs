use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use sqlx::FromRow;

use crate::core::validation::Candidate;

pub const TABLE_NAME: &str = "public.person";

#[derive(Clone, Debug, Deserialize, FromRow, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl Person {
    pub fn candidate(&self) -> Candidate<'_> {
        Candidate {
            name: &self.name,
            email: &self.email,
            mobile_number: &self.mobile_number,
            date_of_birth: &self.date_of_birth,
        }
    }
}

/// Fields of a person before the store assigns id and timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
}

impl NewPerson {
    pub fn candidate(&self) -> Candidate<'_> {
        Candidate {
            name: &self.name,
            email: &self.email,
            mobile_number: &self.mobile_number,
            date_of_birth: &self.date_of_birth,
        }
    }
}

/// Fields to overwrite on update, `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub date_of_birth: Option<String>,
}

impl PersonChanges {
    pub fn apply_to(self, person: &mut Person) {
        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(email) = self.email {
            person.email = email;
        }
        if let Some(mobile_number) = self.mobile_number {
            person.mobile_number = mobile_number;
        }
        if let Some(date_of_birth) = self.date_of_birth {
            person.date_of_birth = date_of_birth;
        }
    }
}
