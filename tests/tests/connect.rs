use tabmap::{stmt::Value, Db, Model, Tracked};

#[derive(Debug, Default, PartialEq, Model)]
struct Note {
    id: i64,
    body: String,
}

#[tokio::test]
async fn connect_in_memory() {
    tests::init_logging();

    let db = Db::connect("sqlite::memory:").await.unwrap();
    assert_eq!(db.driver().url(), "sqlite::memory:");

    let one: i64 = db.execute_scalar("SELECT 1", &[]).await.unwrap();
    assert_eq!(one, 1);
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Db::connect("postgresql://localhost/contractors")
        .await
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn file_database_persists_between_connections() {
    tests::init_logging();

    let path = std::env::temp_dir().join(format!("tabmap-{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite:{}", path.display());

    {
        let db = Db::connect(&url).await.unwrap();
        db.execute("CREATE TABLE Notes (Id INTEGER PRIMARY KEY, Body TEXT)", &[])
            .await
            .unwrap();

        let items = [Tracked::added(Note {
            id: 0,
            body: "hello".to_string(),
        })];
        db.set(&items, "Notes", &["Body"]).await.unwrap();
    }

    let db = Db::connect(&url).await.unwrap();
    let notes: Vec<Note> = db
        .get("SELECT Id, Body FROM Notes WHERE Body = ?1", &[Value::from("hello")])
        .await
        .unwrap();
    assert_eq!(
        notes,
        vec![Note {
            id: 1,
            body: "hello".to_string(),
        }]
    );

    drop(db);
    let _ = std::fs::remove_file(&path);
}
