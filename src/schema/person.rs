use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::{
    core::utils::datetime_to_string,
    model::person::{NewPerson, Person, PersonChanges},
};

use super::common::{
    BadRequestResponse, InternalServerErrorResponse, MessageResponse, NotFoundResponse,
};

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Person> for PersonResponse {
    fn from(value: Person) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            mobile_number: value.mobile_number,
            date_of_birth: value.date_of_birth,
            created_at: datetime_to_string(value.created_at),
            updated_at: datetime_to_string(value.updated_at),
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PersonCreateRequest {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
}

impl From<PersonCreateRequest> for NewPerson {
    fn from(value: PersonCreateRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            mobile_number: value.mobile_number,
            date_of_birth: value.date_of_birth,
        }
    }
}

#[derive(Object, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl From<PersonUpdateRequest> for PersonChanges {
    fn from(value: PersonUpdateRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            mobile_number: value.mobile_number,
            date_of_birth: value.date_of_birth,
        }
    }
}

fn bad_request(err: poem::Error) -> BadRequestResponse {
    BadRequestResponse::new(err)
}

#[derive(ApiResponse)]
pub enum PersonListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<PersonResponse>>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum PersonDetailResponses {
    #[oai(status = 200)]
    Ok(Json<PersonResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "person_create_bad_request")]
pub enum PersonCreateResponses {
    #[oai(status = 201)]
    Created(Json<PersonResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn person_create_bad_request(err: poem::Error) -> PersonCreateResponses {
    PersonCreateResponses::BadRequest(Json(bad_request(err)))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "person_update_bad_request")]
pub enum PersonUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<PersonResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

fn person_update_bad_request(err: poem::Error) -> PersonUpdateResponses {
    PersonUpdateResponses::BadRequest(Json(bad_request(err)))
}

#[derive(ApiResponse)]
pub enum PersonDeleteResponses {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
