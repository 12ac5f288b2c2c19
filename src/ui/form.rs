use crate::{
    core::validation::Candidate,
    schema::person::{PersonCreateRequest, PersonResponse, PersonUpdateRequest},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    MobileNumber,
    DateOfBirth,
}

/// Form state. `id` is `None` while adding and set while modifying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
}

impl PersonForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::MobileNumber => self.mobile_number = value,
            FormField::DateOfBirth => self.date_of_birth = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn candidate(&self) -> Candidate<'_> {
        Candidate {
            name: &self.name,
            email: &self.email,
            mobile_number: &self.mobile_number,
            date_of_birth: &self.date_of_birth,
        }
    }

    /// True when all four user fields equal the record's.
    pub fn matches(&self, person: &PersonResponse) -> bool {
        person.name == self.name
            && person.email == self.email
            && person.mobile_number == self.mobile_number
            && person.date_of_birth == self.date_of_birth
    }

    pub fn create_request(&self) -> PersonCreateRequest {
        PersonCreateRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile_number: self.mobile_number.clone(),
            date_of_birth: self.date_of_birth.clone(),
        }
    }

    pub fn update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            mobile_number: Some(self.mobile_number.clone()),
            date_of_birth: Some(self.date_of_birth.clone()),
        }
    }
}

impl From<&PersonResponse> for PersonForm {
    fn from(value: &PersonResponse) -> Self {
        Self {
            id: Some(value.id),
            name: value.name.clone(),
            email: value.email.clone(),
            mobile_number: value.mobile_number.clone(),
            date_of_birth: value.date_of_birth.clone(),
        }
    }
}
