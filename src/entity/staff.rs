//! 教职工实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: Option<i64>,
    pub full_name: String,
    pub staff_type: String,
    pub designation_id: Option<i64>,
    pub department_id: Option<i64>,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub date_joined: Date,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::designations::Entity",
        from = "Column::DesignationId",
        to = "super::designations::Column::Id"
    )]
    Designation,
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id"
    )]
    Department,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::designations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self) -> crate::models::staff::entities::Staff {
        use crate::models::staff::entities::{Staff, StaffType};

        Staff {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            staff_type: self
                .staff_type
                .parse::<StaffType>()
                .unwrap_or(StaffType::NonTeaching),
            designation_id: self.designation_id,
            department_id: self.department_id,
            email: self.email,
            phone: self.phone,
            date_joined: self.date_joined,
            is_active: self.is_active,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
