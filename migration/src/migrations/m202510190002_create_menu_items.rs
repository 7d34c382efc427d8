use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510190002_create_menu_items"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("menu_items"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("seq")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("id")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("id_kind"))
                            .enumeration(
                                Alias::new("menu_item_id_kind"),
                                vec![Alias::new("object_id"), Alias::new("string")],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("recipe")).text().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("image")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("category")).string().not_null())
                    .col(ColumnDef::new(Alias::new("price")).double().not_null())
                    .to_owned(),
            )
            .await?;

        // The same text may exist once per identifier kind.
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_id_kind")
                    .table(Alias::new("menu_items"))
                    .col(Alias::new("id"))
                    .col(Alias::new("id_kind"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_category")
                    .table(Alias::new("menu_items"))
                    .col(Alias::new("category"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("menu_items")).to_owned())
            .await
    }
}
