use std::time::Duration;

use tabmap::{driver::Transaction, stmt::Value, Db, Model};
use tests::{setup, setup_with};

#[derive(Debug, Default, PartialEq, Model)]
struct Counter {
    id: i64,
    hits: u32,
}

async fn create_table(db: &Db) {
    db.execute(
        "CREATE TABLE Counters (Id INTEGER PRIMARY KEY, Hits INTEGER NOT NULL)",
        &[],
    )
    .await
    .unwrap();
}

async fn hits(db: &Db) -> Option<u32> {
    db.execute_scalar("SELECT SUM(Hits) FROM Counters", &[])
        .await
        .unwrap()
}

#[tokio::test]
async fn commit_on_ok() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let seen = db
        .transaction(async |tx| {
            tx.execute(
                "INSERT INTO Counters (Id, Hits) VALUES (?1, ?2)",
                &[Value::from(1i64), Value::from(3u32)],
            )
            .await?;

            // Writes are visible inside the transaction
            tx.get::<Counter>("SELECT Id, Hits FROM Counters", &[]).await
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![Counter { id: 1, hits: 3 }]);
    assert_eq!(hits(&db).await, Some(3));
    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Commit]
    );
}

#[tokio::test]
async fn rollback_on_err() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let err = db
        .transaction(async |tx| {
            tx.execute("INSERT INTO Counters (Id, Hits) VALUES (1, 1)", &[])
                .await?;
            Err::<(), _>(tabmap::err!("give up"))
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "give up");
    assert_eq!(hits(&db).await, None);
    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Rollback]
    );
}

#[tokio::test]
async fn rollback_on_timeout() {
    let mut builder = Db::builder();
    builder.transaction_timeout(Duration::from_millis(50));
    let (db, _log) = setup_with(builder).await;
    create_table(&db).await;

    let err = db
        .transaction(async |tx| {
            tx.execute("INSERT INTO Counters (Id, Hits) VALUES (1, 1)", &[])
                .await?;
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await
        .unwrap_err();

    assert!(err.is_transaction_timed_out());
    assert_eq!(err.to_string(), "transaction timed out after 50ms");
    assert_eq!(hits(&db).await, None);
}

#[tokio::test]
async fn set_inside_explicit_transaction() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let items = [
        tabmap::Tracked::added(Counter { id: 1, hits: 2 }),
        tabmap::Tracked::added(Counter { id: 2, hits: 5 }),
    ];

    let count = db
        .transaction(async |tx| tx.set(&items, "Counters", &["Hits"]).await)
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(hits(&db).await, Some(7));

    // No nested transaction is started by `set`
    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Commit]
    );
}

#[tokio::test]
async fn cancelled_transaction_is_rolled_back_before_next_use() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let cancelled = tokio::time::timeout(
        Duration::from_millis(20),
        db.transaction(async |tx| {
            tx.execute("INSERT INTO Counters (Id, Hits) VALUES (1, 1)", &[])
                .await?;
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok(())
        }),
    )
    .await;
    assert!(cancelled.is_err());

    // The abandoned insert is gone
    assert_eq!(hits(&db).await, None);

    let count = db
        .set(
            &[tabmap::Tracked::added(Counter { id: 0, hits: 4 })],
            "Counters",
            &["Hits"],
        )
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(hits(&db).await, Some(4));

    assert_eq!(
        log.transactions(),
        vec![
            Transaction::Start,
            Transaction::Rollback,
            Transaction::Start,
            Transaction::Commit,
        ]
    );
}

#[tokio::test]
async fn failed_rollback_keeps_original_error() {
    let (db, _log) = setup().await;
    create_table(&db).await;

    let err = db
        .transaction(async |tx| {
            tx.execute("INSERT INTO Counters (Id, Hits) VALUES (1, 1)", &[])
                .await?;
            // Ends the transaction behind the mapper's back, so its own
            // ROLLBACK fails
            tx.execute("ROLLBACK", &[]).await?;
            Err::<(), _>(tabmap::err!("give up"))
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "give up");

    // The connection stays usable
    db.execute("INSERT INTO Counters (Id, Hits) VALUES (2, 3)", &[])
        .await
        .unwrap();
    assert_eq!(hits(&db).await, Some(3));
}
