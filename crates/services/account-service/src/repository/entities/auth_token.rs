//! Auth token database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::AuthToken;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AuthToken {
    fn from(model: Model) -> Self {
        AuthToken {
            key: model.key,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
