//! Create blood_donations table

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
                    .table(BloodDonations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BloodDonations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BloodDonations::Units).integer().not_null())
                    .col(ColumnDef::new(BloodDonations::DonationDate).date().not_null())
                    .col(ColumnDef::new(BloodDonations::DonorId).big_integer().not_null())
                    .col(ColumnDef::new(BloodDonations::AdminId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_donations_donor")
                            .from(BloodDonations::Table, BloodDonations::DonorId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blood_donations_admin")
                            .from(BloodDonations::Table, BloodDonations::AdminId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One donation per donor per day
        manager
            .create_index(
                Index::create()
                    .name("idx_blood_donations_donor_date")
                    .table(BloodDonations::Table)
                    .col(BloodDonations::DonorId)
                    .col(BloodDonations::DonationDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BloodDonations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BloodDonations {
    Table,
    Id,
    Units,
    DonationDate,
    DonorId,
    AdminId,
}
