//! Diesel models for category records.

use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryId, SanitizedTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(primary_key(cid))]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub cid: i32,
    pub name: String,
    pub icon: String,
    pub bg_color: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self::new(
            CategoryId::try_from(category.cid)?,
            SanitizedTitle::new(category.name)?,
            category.icon,
            category.bg_color,
        ))
    }
}
