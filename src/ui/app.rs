use crate::{
    core::validation::{validate_person, DateCheck, ValidationError},
    schema::person::PersonResponse,
};

use super::{
    api::PeopleApi,
    form::{FormField, PersonForm},
};

pub const DATA_ALREADY_EXISTS_MESSAGE: &str = "data already exists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally, nothing was sent.
    Invalid(ValidationError),
    /// Same four fields already present in the loaded list, nothing was sent.
    AlreadyExists,
    Saved,
    /// The request failed. The fault is logged and the form is kept.
    Failed,
}

pub struct PeopleApp<C: PeopleApi> {
    api: C,
    people: Vec<PersonResponse>,
    form: PersonForm,
    error: Option<String>,
}

impl<C: PeopleApi> PeopleApp<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            people: vec![],
            form: PersonForm::default(),
            error: None,
        }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    pub fn people(&self) -> &[PersonResponse] {
        &self.people
    }

    pub fn form(&self) -> &PersonForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-fetch the list. On failure the previous list stays in place.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(people) => self.people = people,
            Err(err) => tracing::error!("error fetching people: {}", err),
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Err(err) = validate_person(&self.form.candidate(), DateCheck::Calendar) {
            self.error = Some(err.to_string());
            return SubmitOutcome::Invalid(err);
        }
        self.error = None;

        // Only a hint against the last loaded list, the server check decides.
        if self.people.iter().any(|person| self.form.matches(person)) {
            self.error = Some(DATA_ALREADY_EXISTS_MESSAGE.to_string());
            return SubmitOutcome::AlreadyExists;
        }

        let res = match self.form.id {
            Some(id) => self
                .api
                .update(id, &self.form.update_request())
                .await
                .map(|_| ()),
            None => self
                .api
                .create(&self.form.create_request())
                .await
                .map(|_| ()),
        };
        if let Err(err) = res {
            tracing::error!("error adding/updating person: {}", err);
            return SubmitOutcome::Failed;
        }

        self.load().await;
        self.form.clear();
        SubmitOutcome::Saved
    }

    /// Copy a listed person into the form so the next submit updates it.
    pub fn modify(&mut self, id: i32) -> bool {
        match self.people.iter().find(|person| person.id == id) {
            Some(person) => {
                self.form = PersonForm::from(person);
                true
            }
            None => false,
        }
    }

    pub async fn delete(&mut self, id: i32) {
        if let Err(err) = self.api.delete(id).await {
            tracing::error!("error deleting person: {}", err);
            return;
        }
        self.load().await;
    }

    pub fn render(&self) -> String {
        let mut out = String::from("CMS Application\nUSER DATA\n");
        if let Some(error) = &self.error {
            out.push_str(&format!("! {}\n", error));
        }
        match self.form.id {
            Some(id) => out.push_str(&format!("[Modify Person #{}]\n", id)),
            None => out.push_str("[Add Person]\n"),
        }
        for person in &self.people {
            out.push_str(&format!(
                "{}. {} - {} - {} - {}\n",
                person.id, person.name, person.email, person.mobile_number, person.date_of_birth
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fake::{person, FakePeopleApi};

    fn fill(app: &mut PeopleApp<FakePeopleApi>, name: &str, email: &str, mobile: &str, dob: &str) {
        app.set_field(FormField::Name, name);
        app.set_field(FormField::Email, email);
        app.set_field(FormField::MobileNumber, mobile);
        app.set_field(FormField::DateOfBirth, dob);
    }

    #[tokio::test]
    async fn test_load() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![person(
            1,
            "Ann",
            "ann@x.com",
        )]));
        app.load().await;
        assert_eq!(app.people().len(), 1);
        assert_eq!(app.api.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_submit_invalid_makes_no_request() {
        let mut app = PeopleApp::new(FakePeopleApi::default());
        fill(&mut app, "Ann", "no-at-sign", "1234567890", "1990-01-01");

        let outcome = app.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::InvalidEmail));
        assert_eq!(app.error(), Some("invalid email address"));
        assert!(app.api.calls().is_empty());
        assert_eq!(app.form().email, "no-at-sign");
    }

    #[tokio::test]
    async fn test_submit_rejects_calendar_invalid_date() {
        let mut app = PeopleApp::new(FakePeopleApi::default());
        fill(&mut app, "Leap", "leap@x.com", "1234567890", "2020-02-30");

        let outcome = app.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::InvalidDateOfBirth)
        );
        assert_eq!(app.error(), Some("invalid date of birth format"));
        assert!(app.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_creates_and_refreshes() {
        let mut app = PeopleApp::new(FakePeopleApi::default());
        app.load().await;
        fill(&mut app, "Ann", "ann@x.com", "1234567890", "1990-01-01");

        let outcome = app.submit().await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(app.api.calls(), vec!["list", "create", "list"]);
        assert_eq!(app.people().len(), 1);
        assert_eq!(app.people()[0].name, "Ann");
        assert_eq!(app.form(), &PersonForm::default());
        assert_eq!(app.error(), None);
    }

    #[tokio::test]
    async fn test_submit_duplicate_of_loaded_record() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![person(
            1,
            "Ann",
            "ann@x.com",
        )]));
        app.load().await;
        fill(&mut app, "Ann", "ann@x.com", "1234567890", "1990-01-01");

        let outcome = app.submit().await;

        assert_eq!(outcome, SubmitOutcome::AlreadyExists);
        assert_eq!(app.error(), Some(DATA_ALREADY_EXISTS_MESSAGE));
        assert_eq!(app.api.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_submit_same_email_left_to_server() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![person(
            1,
            "Ann",
            "ann@x.com",
        )]));
        app.load().await;
        fill(&mut app, "Other Ann", "ann@x.com", "1234567890", "1990-01-01");

        let outcome = app.submit().await;

        // the server rejects it, the client only logs the failure
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(app.error(), None);
        assert_eq!(app.form().name, "Other Ann");
        assert_eq!(app.api.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_modify_then_submit_updates() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![
            person(1, "Ann", "ann@x.com"),
            person(2, "Bob", "bob@x.com"),
        ]));
        app.load().await;

        assert!(app.modify(2));
        assert_eq!(app.form().id, Some(2));
        assert_eq!(app.form().email, "bob@x.com");
        app.set_field(FormField::Name, "Bob B");

        let outcome = app.submit().await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(app.api.calls(), vec!["list", "update 2", "list"]);
        assert_eq!(app.people()[1].name, "Bob B");
        assert_eq!(app.form().id, None);
    }

    #[tokio::test]
    async fn test_modify_unknown_id() {
        let mut app = PeopleApp::new(FakePeopleApi::default());
        app.load().await;
        assert!(!app.modify(42));
        assert_eq!(app.form(), &PersonForm::default());
    }

    #[tokio::test]
    async fn test_delete_refreshes() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![
            person(1, "Ann", "ann@x.com"),
            person(2, "Bob", "bob@x.com"),
        ]));
        app.load().await;

        app.delete(1).await;

        assert_eq!(app.api.calls(), vec!["list", "delete 1", "list"]);
        assert_eq!(app.people().len(), 1);
        assert_eq!(app.people()[0].id, 2);
    }

    #[tokio::test]
    async fn test_faults_leave_state_unchanged() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![person(
            1,
            "Ann",
            "ann@x.com",
        )]));
        app.load().await;
        app.api.set_offline(true);

        fill(&mut app, "Bob", "bob@x.com", "1234567890", "1990-01-01");
        assert_eq!(app.submit().await, SubmitOutcome::Failed);
        app.delete(1).await;
        app.load().await;

        assert_eq!(app.people().len(), 1);
        assert_eq!(app.form().email, "bob@x.com");
        assert_eq!(app.error(), None);
    }

    #[tokio::test]
    async fn test_render() {
        let mut app = PeopleApp::new(FakePeopleApi::with_people(vec![person(
            1,
            "Ann",
            "ann@x.com",
        )]));
        app.load().await;
        app.set_field(FormField::Email, "bad");
        app.submit().await;

        assert_eq!(
            app.render(),
            "CMS Application\nUSER DATA\n! invalid email address\n[Add Person]\n\
             1. Ann - ann@x.com - 1234567890 - 1990-01-01\n"
        );

        app.modify(1);
        assert!(app.render().contains("[Modify Person #1]"));
    }
}
