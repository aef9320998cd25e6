use sqlx::SqlitePool;

use crate::models::Course;

/// Fetches the page-th block of `per_page` courses in id order, plus the
/// total row count. Pages past the end come back empty.
pub async fn fetch_course_page(
    db: &SqlitePool,
    page: i64,
    per_page: i64,
) -> Result<(Vec<Course>, i64), sqlx::Error> {
    // page/per_page are client-supplied; saturate instead of overflowing so
    // an absurd page just lands past the end.
    let offset = (page - 1).saturating_mul(per_page);

    let items = sqlx::query_as::<_, Course>(
        "SELECT id, name FROM courses ORDER BY id LIMIT ? OFFSET ?",
    )
    .bind(per_page)
    .bind(offset)
    .fetch_all(db)
    .await?;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(db)
        .await?;

    Ok((items, total))
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn find_course_by_name(
    db: &SqlitePool,
    name: &str,
) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE name = ?")
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn insert_course(db: &SqlitePool, name: &str) -> Result<Course, sqlx::Error> {
    let result = sqlx::query("INSERT INTO courses (name) VALUES (?)")
        .bind(name)
        .execute(db)
        .await?;

    Ok(Course {
        id: result.last_insert_rowid(),
        name: name.to_string(),
    })
}

pub async fn update_course_name(
    db: &SqlitePool,
    id: i64,
    name: &str,
) -> Result<Course, sqlx::Error> {
    sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Course {
        id,
        name: name.to_string(),
    })
}

/// Deletes zero or one row; callers treat both the same.
pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(())
}
