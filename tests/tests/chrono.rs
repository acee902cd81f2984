#![cfg(feature = "chrono")]

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tabmap::{Model, Tracked};
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Invoice {
    id: i64,
    issued_on: NaiveDate,
    paid_at: Option<DateTime<Utc>>,
    booked_at: Option<NaiveDateTime>,
}

#[tokio::test]
async fn dates_round_trip_through_text_columns() {
    let (db, _log) = setup().await;
    db.execute(
        "CREATE TABLE Invoices (Id INTEGER PRIMARY KEY, IssuedOn TEXT, PaidAt TEXT, BookedAt TEXT)",
        &[],
    )
    .await
    .unwrap();

    let issued_on = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let paid_at = Utc.with_ymd_and_hms(2024, 5, 3, 14, 30, 0).unwrap();
    let booked_at = issued_on.and_hms_milli_opt(9, 15, 0, 250).unwrap();

    let items = [
        Tracked::added(Invoice {
            id: 0,
            issued_on,
            paid_at: Some(paid_at),
            booked_at: Some(booked_at),
        }),
        Tracked::added(Invoice {
            id: 0,
            issued_on,
            paid_at: None,
            booked_at: None,
        }),
    ];
    db.set(&items, "Invoices", &["IssuedOn", "PaidAt", "BookedAt"])
        .await
        .unwrap();

    let invoices: Vec<Invoice> = db
        .get(
            "SELECT Id, IssuedOn, PaidAt, BookedAt FROM Invoices ORDER BY Id",
            &[],
        )
        .await
        .unwrap();

    assert_eq!(
        invoices,
        vec![
            Invoice {
                id: 1,
                issued_on,
                paid_at: Some(paid_at),
                booked_at: Some(booked_at),
            },
            Invoice {
                id: 2,
                issued_on,
                paid_at: None,
                booked_at: None,
            },
        ]
    );
}

#[tokio::test]
async fn sqlite_date_functions_map_to_chrono() {
    let (db, _log) = setup().await;

    let date: NaiveDate = db
        .execute_scalar("SELECT date('2024-02-29')", &[])
        .await
        .unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    let instant: DateTime<Utc> = db
        .execute_scalar("SELECT datetime('2024-02-29 08:00:00')", &[])
        .await
        .unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap());
}
