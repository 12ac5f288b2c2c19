use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Dummy, Fake, Faker,
};
use sqlx::{PgPool, Postgres, Transaction};

use crate::model::person::{Person, TABLE_NAME};

pub struct PersonFactory<T: Clone> {
    modifier_one: fn(x: &PersonDummy, ext: T) -> PersonDummy,
    modifier_many: fn(x: &PersonDummy, idx: usize, ext: T) -> PersonDummy,
}

impl<T: Clone> Default for PersonFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> PersonFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &PersonDummy, ext: T) -> PersonDummy) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &PersonDummy, idx: usize, ext: T) -> PersonDummy) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Person> {
        let data = PersonDummy::new();
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        let person = insert_dummy(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(person)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Person>> {
        let mut result: Vec<Person> = vec![];
        let mut tx = db.begin().await?;
        for idx in 0..num as usize {
            let mut data = PersonDummy::new();
            data.email = format!("{}.{}", idx, data.email);
            let data = (self.modifier_many)(&data, idx, ext.clone());
            result.push(insert_dummy(&mut tx, &data).await?);
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert_dummy(
    tx: &mut Transaction<'_, Postgres>,
    data: &PersonDummy,
) -> anyhow::Result<Person> {
    let person = sqlx::query_as::<_, Person>(
        format!(
            r#"
        INSERT INTO {} (name, email, mobile_number, date_of_birth)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, mobile_number, date_of_birth, created_at, updated_at"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.mobile_number)
    .bind(&data.date_of_birth)
    .fetch_one(&mut **tx)
    .await?;
    Ok(person)
}

/// Random person fields that pass validation.
#[derive(Debug, Clone)]
pub struct PersonDummy {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
}

#[derive(Debug, Dummy)]
struct PersonSeed {
    #[dummy(faker = "Name()")]
    name: String,
    #[dummy(faker = "SafeEmail()")]
    email: String,
    #[dummy(faker = "1_000_000_000u64..10_000_000_000u64")]
    mobile_number: u64,
    #[dummy(faker = "1950..2010")]
    year: i32,
    #[dummy(faker = "1..13")]
    month: u32,
    #[dummy(faker = "1..29")]
    day: u32,
}

impl PersonDummy {
    pub fn new() -> Self {
        let seed = Faker.fake::<PersonSeed>();
        Self {
            name: seed.name,
            email: seed.email,
            mobile_number: seed.mobile_number.to_string(),
            date_of_birth: format!("{:04}-{:02}-{:02}", seed.year, seed.month, seed.day),
        }
    }
}

impl Default for PersonDummy {
    fn default() -> Self {
        Self::new()
    }
}
