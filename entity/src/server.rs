use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub ip: String,
    pub inbound_tag: String,
    pub install_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::server_event::Entity")]
    ServerEvent,
}

impl Related<super::server_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
