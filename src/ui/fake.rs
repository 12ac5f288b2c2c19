use std::sync::Mutex;

use crate::schema::person::{PersonCreateRequest, PersonResponse, PersonUpdateRequest};

use super::api::{ApiError, PeopleApi};

const TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

#[derive(Default)]
struct FakeState {
    people: Vec<PersonResponse>,
    next_id: i32,
    calls: Vec<String>,
    offline: bool,
}

/// In-memory stand-in for the people service.
pub struct FakePeopleApi {
    state: Mutex<FakeState>,
}

impl Default for FakePeopleApi {
    fn default() -> Self {
        Self::with_people(vec![])
    }
}

impl FakePeopleApi {
    pub fn with_people(people: Vec<PersonResponse>) -> Self {
        let next_id = people.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                people,
                next_id,
                ..Default::default()
            }),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn stored(&self) -> Vec<PersonResponse> {
        self.state.lock().unwrap().people.clone()
    }
}

fn offline() -> ApiError {
    ApiError::Rejected {
        status: 500,
        reason: "internal server error".to_string(),
    }
}

impl PeopleApi for FakePeopleApi {
    async fn list(&self) -> Result<Vec<PersonResponse>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list".to_string());
        if state.offline {
            return Err(offline());
        }
        Ok(state.people.clone())
    }

    async fn create(&self, request: &PersonCreateRequest) -> Result<PersonResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("create".to_string());
        if state.offline {
            return Err(offline());
        }
        if state.people.iter().any(|p| p.email == request.email) {
            return Err(ApiError::Rejected {
                status: 400,
                reason: "person with same email already exists".to_string(),
            });
        }
        let person = PersonResponse {
            id: state.next_id,
            name: request.name.clone(),
            email: request.email.clone(),
            mobile_number: request.mobile_number.clone(),
            date_of_birth: request.date_of_birth.clone(),
            created_at: TIMESTAMP.to_string(),
            updated_at: TIMESTAMP.to_string(),
        };
        state.next_id += 1;
        state.people.push(person.clone());
        Ok(person)
    }

    async fn update(
        &self,
        id: i32,
        request: &PersonUpdateRequest,
    ) -> Result<PersonResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update {}", id));
        if state.offline {
            return Err(offline());
        }
        let Some(person) = state.people.iter_mut().find(|p| p.id == id) else {
            return Err(ApiError::Rejected {
                status: 404,
                reason: "person not found".to_string(),
            });
        };
        if let Some(name) = &request.name {
            person.name = name.clone();
        }
        if let Some(email) = &request.email {
            person.email = email.clone();
        }
        if let Some(mobile_number) = &request.mobile_number {
            person.mobile_number = mobile_number.clone();
        }
        if let Some(date_of_birth) = &request.date_of_birth {
            person.date_of_birth = date_of_birth.clone();
        }
        Ok(person.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete {}", id));
        if state.offline {
            return Err(offline());
        }
        let before = state.people.len();
        state.people.retain(|p| p.id != id);
        if state.people.len() == before {
            return Err(ApiError::Rejected {
                status: 404,
                reason: "person not found".to_string(),
            });
        }
        Ok(())
    }
}

pub fn person(id: i32, name: &str, email: &str) -> PersonResponse {
    PersonResponse {
        id,
        name: name.to_string(),
        email: email.to_string(),
        mobile_number: "1234567890".to_string(),
        date_of_birth: "1990-01-01".to_string(),
        created_at: TIMESTAMP.to_string(),
        updated_at: TIMESTAMP.to_string(),
    }
}
