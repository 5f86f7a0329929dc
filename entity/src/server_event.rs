use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_ip: String,
    /// One of `online`, `offline_start`, `offline_end`, `high_load`
    pub event_type: String,
    pub event_time: DateTimeUtc,
    pub duration_seconds: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server::Entity",
        from = "Column::ServerIp",
        to = "super::server::Column::Ip",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Server,
}

impl Related<super::server::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Server.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
