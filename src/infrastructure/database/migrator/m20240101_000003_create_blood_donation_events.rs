//! Create blood_donation_events table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BloodDonationEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BloodDonationEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BloodDonationEvents::EventName)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BloodDonationEvents::EventDate).date().not_null())
                    .col(
                        ColumnDef::new(BloodDonationEvents::BloodType)
                            .string_len(8)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BloodDonationEvents::Units).integer().not_null())
                    .col(
                        ColumnDef::new(BloodDonationEvents::OrganizerId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_donation_events_organizer")
                            .from(BloodDonationEvents::Table, BloodDonationEvents::OrganizerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blood_donation_events_unique")
                    .table(BloodDonationEvents::Table)
                    .col(BloodDonationEvents::EventName)
                    .col(BloodDonationEvents::EventDate)
                    .col(BloodDonationEvents::BloodType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodDonationEvents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BloodDonationEvents {
    Table,
    Id,
    EventName,
    EventDate,
    BloodType,
    Units,
    OrganizerId,
}
