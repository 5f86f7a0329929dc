use crate::server::{data::inbound::InboundRepository, model::inbound::Inbound};
use entity::prelude::Inbound as InboundEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests tags are listed in order.
///
/// Expected: Ok with tags sorted ascending
#[tokio::test]
async fn lists_tags_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(InboundEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inbound(db, "Netherlands").await?;
    factory::create_inbound(db, "Finland").await?;

    let repo = InboundRepository::new(db);
    let tags = repo.tags().await?;

    assert_eq!(tags, vec!["Finland".to_string(), "Netherlands".to_string()]);

    Ok(())
}

/// Tests upserting replaces the record with the same tag.
///
/// Expected: Ok with a single inbound carrying the new key
#[tokio::test]
async fn upsert_replaces_existing_inbound() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(InboundEntity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inbound(db, "Finland").await?;

    let repo = InboundRepository::new(db);
    repo.upsert(Inbound {
        inbound_tag: "Finland".to_string(),
        server_name: "fi1.example.com".to_string(),
        vless_key: "vless://new".to_string(),
        domain: "example.com".to_string(),
    })
    .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].vless_key, "vless://new");
    assert_eq!(all[0].server_name, "fi1.example.com");

    Ok(())
}
