use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510190004_create_carts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("carts"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("seq")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("id")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("menu_id")).string().not_null())
                    .col(ColumnDef::new(Alias::new("user_email")).string().not_null())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("image")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("price")).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_carts_user_email")
                    .table(Alias::new("carts"))
                    .col(Alias::new("user_email"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("carts")).to_owned())
            .await
    }
}
