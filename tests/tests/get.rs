use tabmap::{stmt::Value, Db, Model};
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct AddressModel {
    country: String,
    city: String,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct ContractorModel {
    id: i64,
    name: String,
    tax_id: Option<String>,
    address: AddressModel,
}

const SELECT_CONTRACTORS: &str = r#"
    SELECT c.Id, c.Name, c.TaxId,
           a.Country AS "Address/Country",
           a.City AS "Address/City"
    FROM Contractors c
    LEFT JOIN Addresses a ON a.Id = c.AddressId
"#;

async fn seed(db: &Db) {
    db.execute(
        "CREATE TABLE Addresses (Id INTEGER PRIMARY KEY, Country TEXT, City TEXT)",
        &[],
    )
    .await
    .unwrap();
    db.execute(
        "CREATE TABLE Contractors (Id INTEGER PRIMARY KEY, Name TEXT NOT NULL, TaxId TEXT, AddressId INTEGER)",
        &[],
    )
    .await
    .unwrap();

    db.execute(
        "INSERT INTO Addresses (Id, Country, City) VALUES (1, 'PL', 'Warsaw')",
        &[],
    )
    .await
    .unwrap();
    db.execute(
        "INSERT INTO Contractors (Id, Name, TaxId, AddressId) VALUES (1, 'Acme', 'PL525', 1), (2, 'Initech', NULL, NULL)",
        &[],
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn get_maps_joined_rows_into_nested_models() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let sql = format!("{SELECT_CONTRACTORS} ORDER BY c.Id");
    let contractors: Vec<ContractorModel> = db.get(&sql, &[]).await.unwrap();

    assert_eq!(
        contractors,
        vec![
            ContractorModel {
                id: 1,
                name: "Acme".to_string(),
                tax_id: Some("PL525".to_string()),
                address: AddressModel {
                    country: "PL".to_string(),
                    city: "Warsaw".to_string(),
                },
            },
            // Unmatched LEFT JOIN columns are NULL and leave defaults behind
            ContractorModel {
                id: 2,
                name: "Initech".to_string(),
                tax_id: None,
                address: AddressModel::default(),
            },
        ]
    );
}

#[tokio::test]
async fn get_binds_positional_params() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let sql = format!("{SELECT_CONTRACTORS} WHERE c.Name = ?1");
    let contractors: Vec<ContractorModel> = db.get(&sql, &[Value::from("Initech")]).await.unwrap();

    assert_eq!(contractors.len(), 1);
    assert_eq!(contractors[0].id, 2);
}

#[tokio::test]
async fn get_one_returns_first_row_or_none() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let sql = format!("{SELECT_CONTRACTORS} WHERE c.Id = ?1");

    let found: Option<ContractorModel> = db.get_one(&sql, &[Value::from(1i64)]).await.unwrap();
    assert_eq!(found.map(|c| c.address.city), Some("Warsaw".to_string()));

    let missing: Option<ContractorModel> = db.get_one(&sql, &[Value::from(9i64)]).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn execute_scalar_converts_first_cell() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let count: u32 = db
        .execute_scalar("SELECT COUNT(*) FROM Contractors", &[])
        .await
        .unwrap();
    assert_eq!(count, 2);

    let name: Option<String> = db
        .execute_scalar("SELECT Name FROM Contractors WHERE Id = ?1", &[Value::from(5i64)])
        .await
        .unwrap();
    assert_eq!(name, None);

    let tax_id: Option<String> = db
        .execute_scalar("SELECT TaxId FROM Contractors WHERE Id = 2", &[])
        .await
        .unwrap();
    assert_eq!(tax_id, None);
}

#[tokio::test]
async fn bad_alias_is_a_configuration_error() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let err = db
        .get::<ContractorModel>(r#"SELECT City AS "Adress/City" FROM Addresses"#, &[])
        .await
        .unwrap_err();

    assert!(err.is_unknown_property());
    assert!(err.is_configuration());
}

#[tokio::test]
async fn conversion_error_names_column() {
    let (db, _log) = setup().await;
    seed(&db).await;

    let err = db
        .get::<ContractorModel>("SELECT Name AS Id FROM Contractors", &[])
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert_eq!(err.conversion_column(), Some("Id"));
    assert_eq!(err.to_string(), "column `Id`: cannot convert String to i64");
}

#[tokio::test]
async fn driver_errors_propagate() {
    let (db, _log) = setup().await;

    let err = db
        .get::<ContractorModel>("SELECT Id FROM Missing", &[])
        .await
        .unwrap_err();

    assert!(!err.is_configuration());
    assert!(err.to_string().contains("no such table"), "{err}");
}
