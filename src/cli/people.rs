use crate::ui::{FormField, PeopleApi, PeopleApp, SubmitOutcome};

/// Optional field values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct PersonFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub date_of_birth: Option<String>,
}

impl PersonFields {
    fn fill<C: PeopleApi>(self, app: &mut PeopleApp<C>) {
        let fields = [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::MobileNumber, self.mobile_number),
            (FormField::DateOfBirth, self.date_of_birth),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                app.set_field(field, value);
            }
        }
    }
}

pub async fn people_list<C: PeopleApi>(app: &mut PeopleApp<C>) {
    app.load().await;
}

pub async fn people_add<C: PeopleApi>(app: &mut PeopleApp<C>, fields: PersonFields) -> SubmitOutcome {
    app.load().await;
    fields.fill(app);
    app.submit().await
}

/// `None` when the id is not in the loaded list.
pub async fn people_modify<C: PeopleApi>(
    app: &mut PeopleApp<C>,
    id: i32,
    fields: PersonFields,
) -> Option<SubmitOutcome> {
    app.load().await;
    if !app.modify(id) {
        return None;
    }
    fields.fill(app);
    Some(app.submit().await)
}

pub async fn people_delete<C: PeopleApi>(app: &mut PeopleApp<C>, id: i32) {
    app.load().await;
    app.delete(id).await;
}
