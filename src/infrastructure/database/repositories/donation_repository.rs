//! SeaORM implementation of DonationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, NotSet, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::{db_err, query_err};
use crate::domain::{
    BloodDonation, BloodUnits, DomainError, DomainResult, DonationRepository, NewBloodDonation,
};
use crate::infrastructure::database::entities::{blood_donation, user};

pub const DONATION_EXISTS: &str = "donor or donation date already exists";

pub struct SeaOrmDonationRepository {
    db: DatabaseConnection,
}

impl SeaOrmDonationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn donation_model_to_domain(model: blood_donation::Model) -> BloodDonation {
    BloodDonation {
        id: model.id,
        units: model.units,
        donation_date: model.donation_date,
        donor_id: model.donor_id,
        admin_id: model.admin_id,
    }
}

#[derive(Debug, FromQueryResult)]
struct UnitsPerBloodType {
    blood_type: user::BloodTypeCode,
    total_units: Option<i64>,
}

#[async_trait]
impl DonationRepository for SeaOrmDonationRepository {
    async fn save(&self, donation: NewBloodDonation) -> DomainResult<BloodDonation> {
        let active = blood_donation::ActiveModel {
            id: NotSet,
            units: Set(donation.units),
            donation_date: Set(donation.donation_date),
            donor_id: Set(donation.donor_id),
            admin_id: Set(donation.admin_id),
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| db_err(e, DONATION_EXISTS))?;
        debug!(
            "Inserted donation {} for donor {} on {}",
            model.id, model.donor_id, model.donation_date
        );
        Ok(donation_model_to_domain(model))
    }

    async fn update(&self, donation: BloodDonation) -> DomainResult<BloodDonation> {
        let active = blood_donation::ActiveModel {
            id: Set(donation.id),
            units: Set(donation.units),
            donation_date: Set(donation.donation_date),
            donor_id: Set(donation.donor_id),
            admin_id: Set(donation.admin_id),
        };

        match active.update(&self.db).await {
            Ok(model) => Ok(donation_model_to_domain(model)),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound(format!(
                "donation {} does not exist",
                donation.id
            ))),
            Err(e) => Err(db_err(e, DONATION_EXISTS)),
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<BloodDonation>> {
        let model = blood_donation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(model.map(donation_model_to_domain))
    }

    async fn exists_by_donor_and_date(&self, donor_id: i64, date: NaiveDate) -> DomainResult<bool> {
        let count = blood_donation::Entity::find()
            .filter(blood_donation::Column::DonorId.eq(donor_id))
            .filter(blood_donation::Column::DonationDate.eq(date))
            .count(&self.db)
            .await
            .map_err(query_err)?;
        Ok(count > 0)
    }

    async fn find_by_donor(&self, donor_id: i64) -> DomainResult<Vec<BloodDonation>> {
        let models = blood_donation::Entity::find()
            .filter(blood_donation::Column::DonorId.eq(donor_id))
            .order_by_asc(blood_donation::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(models.into_iter().map(donation_model_to_domain).collect())
    }

    async fn sum_units_by_blood_type(&self) -> DomainResult<Vec<BloodUnits>> {
        let rows = blood_donation::Entity::find()
            .select_only()
            .column_as(user::Column::BloodType, "blood_type")
            .column_as(
                Expr::col((blood_donation::Entity, blood_donation::Column::Units)).sum(),
                "total_units",
            )
            .join(JoinType::InnerJoin, blood_donation::Relation::Donor.def())
            .group_by(user::Column::BloodType)
            .into_model::<UnitsPerBloodType>()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let mut totals: Vec<BloodUnits> = rows
            .into_iter()
            .map(|row| BloodUnits {
                blood_type: row.blood_type.into(),
                total_units: row.total_units.unwrap_or(0),
            })
            .collect();
        totals.sort_by_key(|row| row.blood_type);
        Ok(totals)
    }
}
