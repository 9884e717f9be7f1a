use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per single-player game; the frame sequence lives in the jsonb column
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Games::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Games::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Games::TotalScore).integer().null())
                    .col(ColumnDef::new(Games::Scoreboard).json_binary().not_null())
                    .col(ColumnDef::new(Games::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Games::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_games_status")
                    .table(Games::Table)
                    .col(Games::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_games_status").table(Games::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Status,
    TotalScore,
    Scoreboard,
    CreatedAt,
    UpdatedAt,
}
