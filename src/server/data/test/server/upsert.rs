use super::*;

/// Tests inserting a new server.
///
/// Expected: Ok with the server stored and an install date set
#[tokio::test]
async fn creates_new_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let server = repo
        .upsert(UpsertServerParam {
            ip: "192.0.2.1".to_string(),
            inbound_tag: "Germany".to_string(),
        })
        .await?;

    assert_eq!(server.ip, "192.0.2.1");
    assert_eq!(server.inbound_tag, "Germany");
    assert!(server.install_date.is_some());

    Ok(())
}

/// Tests that re-adding an existing IP replaces its tag and refreshes the install date.
///
/// Expected: Ok with a single row carrying the new tag
#[tokio::test]
async fn replaces_tag_of_existing_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let old_date = Utc::now() - Duration::days(30);
    factory::server::ServerFactory::new(db)
        .ip("192.0.2.1")
        .inbound_tag("Old")
        .install_date(Some(old_date))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let server = repo
        .upsert(UpsertServerParam {
            ip: "192.0.2.1".to_string(),
            inbound_tag: "New".to_string(),
        })
        .await?;

    assert_eq!(server.inbound_tag, "New");
    assert!(server.install_date.unwrap() > old_date);

    let count = entity::prelude::Server::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
