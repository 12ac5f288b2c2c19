use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::{
    core::validation::{validate_person, DateCheck},
    model::person::{NewPerson, PersonChanges},
    repository::person::{
        create_person, delete_person, get_all_person, get_person_by_email, get_person_by_id,
        update_person,
    },
    schema::{
        common::{
            BadRequestResponse, InternalServerErrorResponse, MessageResponse, NotFoundResponse,
        },
        person::{
            PersonCreateRequest, PersonCreateResponses, PersonDeleteResponses,
            PersonDetailResponses, PersonListResponses, PersonResponse, PersonUpdateRequest,
            PersonUpdateResponses,
        },
    },
    AppState,
};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "person with same email already exists";
pub const DELETED_MESSAGE: &str = "person deleted successfully";

#[derive(Tags)]
enum ApiPersonTags {
    Person,
}

pub struct ApiPerson;

#[OpenApi]
impl ApiPerson {
    #[oai(path = "/people", method = "get", tag = "ApiPersonTags::Person")]
    async fn get_all_person_api(&self, state: Data<&Arc<AppState>>) -> PersonListResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return PersonListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "get_all_person_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_person(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return PersonListResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "get_all_person_api",
                        "get_all_person",
                        &err.to_string(),
                    ),
                ))
            }
        };

        PersonListResponses::Ok(Json(
            data.into_iter().map(PersonResponse::from).collect(),
        ))
    }

    #[oai(path = "/people/:id", method = "get", tag = "ApiPersonTags::Person")]
    async fn get_detail_person_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> PersonDetailResponses {
        let id = match id.parse::<i32>() {
            Ok(val) => val,
            Err(_) => return PersonDetailResponses::NotFound(Json(NotFoundResponse::default())),
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return PersonDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "get_detail_person_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_person_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return PersonDetailResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "get_detail_person_api",
                        "get_person_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        match data {
            Some(person) => PersonDetailResponses::Ok(Json(PersonResponse::from(person))),
            None => PersonDetailResponses::NotFound(Json(NotFoundResponse::default())),
        }
    }

    #[oai(path = "/people", method = "post", tag = "ApiPersonTags::Person")]
    async fn create_person_api(
        &self,
        Json(json): Json<PersonCreateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> PersonCreateResponses {
        let new_person = NewPerson::from(json);
        if let Err(err) = validate_person(&new_person.candidate(), DateCheck::Pattern) {
            tracing::debug!("reject person {}: {}", new_person.email, err);
            return PersonCreateResponses::BadRequest(Json(BadRequestResponse::new(err)));
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return PersonCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "create_person_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        // Check for existing person with the same email
        let existing = match get_person_by_email(&mut tx, &new_person.email, None).await {
            Ok(val) => val,
            Err(err) => {
                return PersonCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "create_person_api",
                        "get_person_by_email",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if existing.is_some() {
            return PersonCreateResponses::BadRequest(Json(BadRequestResponse::new(
                DUPLICATE_EMAIL_MESSAGE,
            )));
        }

        let created = match create_person(&mut tx, &new_person, None).await {
            Ok(val) => val,
            Err(err) => {
                return PersonCreateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "create_person_api",
                        "create_person",
                        &err.to_string(),
                    ),
                ))
            }
        };
        // a concurrent request took the email between the check and the insert
        let Some(created) = created else {
            return PersonCreateResponses::BadRequest(Json(BadRequestResponse::new(
                DUPLICATE_EMAIL_MESSAGE,
            )));
        };

        if let Err(err) = tx.commit().await {
            return PersonCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.person",
                    "create_person_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        tracing::info!("created person id = {}", created.id);
        PersonCreateResponses::Created(Json(PersonResponse::from(created)))
    }

    #[oai(path = "/people/:id", method = "put", tag = "ApiPersonTags::Person")]
    async fn update_person_api(
        &self,
        Path(id): Path<String>,
        Json(json): Json<PersonUpdateRequest>,
        state: Data<&Arc<AppState>>,
    ) -> PersonUpdateResponses {
        let id = match id.parse::<i32>() {
            Ok(val) => val,
            Err(_) => return PersonUpdateResponses::NotFound(Json(NotFoundResponse::default())),
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return PersonUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "update_person_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_person_by_id(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return PersonUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "update_person_api",
                        "get_person_by_id",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(mut data) = data else {
            return PersonUpdateResponses::NotFound(Json(NotFoundResponse::default()));
        };

        // Merged record goes through the same rules as create
        PersonChanges::from(json).apply_to(&mut data);
        if let Err(err) = validate_person(&data.candidate(), DateCheck::Pattern) {
            tracing::debug!("reject update of person id = {}: {}", id, err);
            return PersonUpdateResponses::BadRequest(Json(BadRequestResponse::new(err)));
        }

        let existing = match get_person_by_email(&mut tx, &data.email, Some(id)).await {
            Ok(val) => val,
            Err(err) => {
                return PersonUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "update_person_api",
                        "get_person_by_email",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if existing.is_some() {
            return PersonUpdateResponses::BadRequest(Json(BadRequestResponse::new(
                DUPLICATE_EMAIL_MESSAGE,
            )));
        }

        let updated = match update_person(&mut tx, &data).await {
            Ok(val) => val,
            Err(err) => {
                return PersonUpdateResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "update_person_api",
                        "update_person",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(updated) = updated else {
            return PersonUpdateResponses::NotFound(Json(NotFoundResponse::default()));
        };

        if let Err(err) = tx.commit().await {
            return PersonUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.person",
                    "update_person_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        tracing::info!("updated person id = {}", updated.id);
        PersonUpdateResponses::Ok(Json(PersonResponse::from(updated)))
    }

    #[oai(path = "/people/:id", method = "delete", tag = "ApiPersonTags::Person")]
    async fn delete_person_api(
        &self,
        Path(id): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> PersonDeleteResponses {
        let id = match id.parse::<i32>() {
            Ok(val) => val,
            Err(_) => return PersonDeleteResponses::NotFound(Json(NotFoundResponse::default())),
        };

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return PersonDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "delete_person_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let deleted = match delete_person(&mut tx, id).await {
            Ok(val) => val,
            Err(err) => {
                return PersonDeleteResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.person",
                        "delete_person_api",
                        "delete_person",
                        &err.to_string(),
                    ),
                ))
            }
        };
        if deleted == 0 {
            return PersonDeleteResponses::NotFound(Json(NotFoundResponse::default()));
        }

        if let Err(err) = tx.commit().await {
            return PersonDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.person",
                    "delete_person_api",
                    "commit transaction",
                    &err.to_string(),
                ),
            ));
        }
        tracing::info!("deleted person id = {}", id);
        PersonDeleteResponses::Ok(Json(MessageResponse {
            message: DELETED_MESSAGE.to_string(),
        }))
    }
}
