//! Integration tests for the room repository and schema bootstrap.

use roombook_db::repositories::RoomRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_seeds_rooms(pool: PgPool) {
    roombook_db::health_check(&pool).await.unwrap();

    let rooms = RoomRepo::list_with_equipment(&pool).await.unwrap();
    let capacities: Vec<i32> = rooms.iter().map(|r| r.room.capacity).collect();
    assert_eq!(capacities, vec![5, 10, 11, 10, 26]);

    let okj = rooms.iter().find(|r| r.room.name == "Salle Okjsdkso").unwrap();
    assert!(okj.equipment.is_empty());

    let first = &rooms[0];
    let mut names: Vec<&str> = first.equipment.iter().map(|e| e.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Retro Projecteur", "TV"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_ids_with_equipment(pool: PgPool) {
    let all = RoomRepo::list_with_equipment(&pool).await.unwrap();
    let wanted = [all[4].room.id, all[2].room.id];

    let rooms = RoomRepo::find_by_ids_with_equipment(&pool, &wanted).await.unwrap();
    let names: Vec<&str> = rooms.iter().map(|r| r.room.name.as_str()).collect();
    assert_eq!(names, vec!["Salle Okjsdkso", "Salle nulle"]);
    assert!(rooms[0].equipment.is_empty());
    assert!(rooms[1].equipment.iter().all(|e| e.room_id == rooms[1].room.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_ids_skips_missing_rooms(pool: PgPool) {
    let rooms = RoomRepo::find_by_ids_with_equipment(&pool, &[999_999]).await.unwrap();
    assert!(rooms.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_capacity_must_be_positive(pool: PgPool) {
    let err = sqlx::query("INSERT INTO rooms (name, description, capacity) VALUES ('Broom closet', '', 0)")
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.code().as_deref(), Some("23514"));

    let rooms = RoomRepo::list_with_equipment(&pool).await.unwrap();
    assert_eq!(rooms.len(), 5);
}
