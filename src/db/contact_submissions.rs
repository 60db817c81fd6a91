use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ContactSubmission, SubmissionRecord};

pub async fn create(pool: &PgPool, record: &SubmissionRecord) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO contact_submissions
            (name, email, phone, service, company_name, problems, additional_info)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
    )
    .bind(&record.name)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(record.service.label())
    .bind(&record.company_name)
    .bind(&record.problems)
    .bind(record.additional_info_column())
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>("SELECT * FROM contact_submissions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
