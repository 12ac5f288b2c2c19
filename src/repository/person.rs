use chrono::{DateTime, FixedOffset, Local};
use sqlx::{Postgres, Transaction};

use crate::{
    core::sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    model::person::{NewPerson, Person, TABLE_NAME},
};

pub async fn get_all_person(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<Vec<Person>> {
    let stmt = query_builder(None, TABLE_NAME, &[], vec!["id ASC".to_string()]);
    let q = binds_query_as::<Person>(&stmt, vec![]);
    let data = q.fetch_all(&mut **tx).await?;
    Ok(data)
}

pub async fn get_person_by_id(
    tx: &mut Transaction<'_, Postgres>,
    id: i32,
) -> anyhow::Result<Option<Person>> {
    let binds: Vec<SqlxBinds> = vec![SqlxBinds::Int(id)];
    let filters: Vec<String> = vec!["id = $1".to_string()];
    let stmt = query_builder(None, TABLE_NAME, &filters, vec![]);
    let q = binds_query_as::<Person>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

/// Look up the holder of `email`, ignoring the person with id `exclude_id`.
pub async fn get_person_by_email(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    exclude_id: Option<i32>,
) -> anyhow::Result<Option<Person>> {
    let mut binds: Vec<SqlxBinds> = vec![SqlxBinds::String(email.to_string())];
    let mut filters: Vec<String> = vec!["email = $1".to_string()];
    if let Some(id) = exclude_id {
        binds.push(SqlxBinds::Int(id));
        filters.push(format!("id <> ${}", binds.len()));
    }
    let stmt = query_builder(None, TABLE_NAME, &filters, vec!["id ASC".to_string()]);
    let q = binds_query_as::<Person>(&stmt, binds);
    let data = q.fetch_optional(&mut **tx).await?;
    Ok(data)
}

/// Insert unless the email is already taken. `None` means another row holds
/// the email, which also covers a concurrent insert that won the race.
pub async fn create_person(
    tx: &mut Transaction<'_, Postgres>,
    new_person: &NewPerson,
    now: Option<DateTime<FixedOffset>>,
) -> anyhow::Result<Option<Person>> {
    let now = now.unwrap_or(Local::now().fixed_offset());
    let data = sqlx::query_as::<_, Person>(
        format!(
            r#"
    INSERT INTO {} (name, email, mobile_number, date_of_birth, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT (email) DO NOTHING
    RETURNING id, name, email, mobile_number, date_of_birth, created_at, updated_at"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&new_person.name)
    .bind(&new_person.email)
    .bind(&new_person.mobile_number)
    .bind(&new_person.date_of_birth)
    .bind(now)
    .bind(now)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data)
}

/// Write the user editable fields. `updated_at` keeps its creation value.
pub async fn update_person(
    tx: &mut Transaction<'_, Postgres>,
    person: &Person,
) -> anyhow::Result<Option<Person>> {
    let data = sqlx::query_as::<_, Person>(
        format!(
            r#"
        UPDATE {}
        SET name = $1, email = $2, mobile_number = $3, date_of_birth = $4
        WHERE id = $5
        RETURNING id, name, email, mobile_number, date_of_birth, created_at, updated_at"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(&person.name)
    .bind(&person.email)
    .bind(&person.mobile_number)
    .bind(&person.date_of_birth)
    .bind(person.id)
    .fetch_optional(&mut **tx)
    .await?;
    Ok(data)
}

/// Returns the number of removed rows.
pub async fn delete_person(tx: &mut Transaction<'_, Postgres>, id: i32) -> anyhow::Result<u64> {
    let res = sqlx::query(format!(r#"DELETE FROM {} WHERE id = $1"#, TABLE_NAME).as_str())
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(res.rows_affected())
}
