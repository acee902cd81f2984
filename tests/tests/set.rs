use tabmap::{
    accept_changes,
    driver::Transaction,
    stmt::{Assignment, Filter, Statement, Update, Value},
    Db, Model, Tracked,
};
use tests::{setup, setup_with};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct ContractorModel {
    id: i64,
    name: String,
    tax_id: Option<String>,
}

async fn create_table(db: &Db) {
    db.execute(
        "CREATE TABLE Contractors (Id INTEGER PRIMARY KEY, Name TEXT NOT NULL UNIQUE, TaxId TEXT)",
        &[],
    )
    .await
    .unwrap();
}

async fn load(db: &Db) -> Vec<ContractorModel> {
    db.get("SELECT Id, Name, TaxId FROM Contractors ORDER BY Id", &[])
        .await
        .unwrap()
}

fn contractor(id: i64, name: &str) -> ContractorModel {
    ContractorModel {
        id,
        name: name.to_string(),
        tax_id: None,
    }
}

#[tokio::test]
async fn set_applies_every_pending_change() {
    let (db, _log) = setup().await;
    create_table(&db).await;

    let mut items = vec![
        Tracked::added(contractor(0, "Acme")),
        Tracked::added(contractor(0, "Initech")),
        Tracked::added(contractor(0, "Umbrella")),
    ];
    let count = db
        .set(&items, "Contractors", &["Name", "TaxId"])
        .await
        .unwrap();
    assert_eq!(count, 3);
    accept_changes(&mut items);

    // Identities are assigned by the store
    let mut items = load(&db)
        .await
        .into_iter()
        .map(Tracked::from)
        .collect::<Vec<_>>();
    assert_eq!(
        items.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    items[0].edit().tax_id = Some("PL525".to_string());
    items[1].mark_deleted();

    let count = db
        .set(&items, "Contractors", &["Name", "TaxId"])
        .await
        .unwrap();
    assert_eq!(count, 2);

    accept_changes(&mut items);
    assert_eq!(items.len(), 2);

    let stored = load(&db).await;
    assert_eq!(
        stored,
        vec![
            ContractorModel {
                id: 1,
                name: "Acme".to_string(),
                tax_id: Some("PL525".to_string()),
            },
            contractor(3, "Umbrella"),
        ]
    );
    assert_eq!(
        stored,
        items.into_iter().map(Tracked::into_inner).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn modified_item_updates_by_identity() {
    let (db, log) = setup().await;
    create_table(&db).await;
    db.execute(
        "INSERT INTO Contractors (Id, Name) VALUES (5, 'Old'), (6, 'Other')",
        &[],
    )
    .await
    .unwrap();

    let items = [Tracked::modified(contractor(5, "New"))];
    let count = db.set(&items, "Contractors", &["Name"]).await.unwrap();
    assert_eq!(count, 1);

    assert_eq!(
        log.generated_statements(),
        vec![Statement::Update(Update {
            table: "Contractors".to_string(),
            assignments: vec![Assignment {
                column: "Name".to_string(),
                value: Value::from("New"),
            }],
            filter: Filter::eq("Id", 5i64),
        })]
    );

    let names: Vec<ContractorModel> = db
        .get("SELECT Id, Name FROM Contractors ORDER BY Id", &[])
        .await
        .unwrap();
    assert_eq!(names, vec![contractor(5, "New"), contractor(6, "Other")]);
}

#[tokio::test]
async fn set_runs_in_a_transaction() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let items = [Tracked::added(contractor(0, "Acme"))];
    db.set(&items, "Contractors", &["Name"]).await.unwrap();

    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Commit]
    );
}

#[tokio::test]
async fn failed_set_is_rolled_back() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let items = [
        Tracked::added(contractor(0, "Acme")),
        Tracked::added(contractor(0, "Acme")),
    ];
    let err = db.set(&items, "Contractors", &["Name"]).await.unwrap_err();
    assert!(err.to_string().contains("UNIQUE"), "{err}");

    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Rollback]
    );
    assert!(load(&db).await.is_empty());
}

#[tokio::test]
async fn set_without_transaction() {
    let mut builder = Db::builder();
    builder.set_in_transaction(false);
    let (db, log) = setup_with(builder).await;
    create_table(&db).await;

    let items = [
        Tracked::added(contractor(0, "Acme")),
        Tracked::added(contractor(0, "Acme")),
    ];
    db.set(&items, "Contractors", &["Name"]).await.unwrap_err();

    assert!(log.transactions().is_empty());
    assert_eq!(load(&db).await.len(), 1);
}

#[tokio::test]
async fn configuration_errors_reach_no_statement() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let items = [Tracked::added(contractor(0, "Acme"))];
    let err = db.set(&items, "Contractors", &["Nme"]).await.unwrap_err();

    assert!(err.is_configuration());
    assert!(log.generated_statements().is_empty());
    assert_eq!(
        log.transactions(),
        vec![Transaction::Start, Transaction::Rollback]
    );
}

#[tokio::test]
async fn unchanged_items_execute_nothing() {
    let (db, log) = setup().await;
    create_table(&db).await;

    let items = vec![Tracked::from(contractor(1, "Acme")); 3];
    let count = db.set(&items, "Contractors", &["Name"]).await.unwrap();

    assert_eq!(count, 0);
    assert!(log.generated_statements().is_empty());
}
