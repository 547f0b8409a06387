use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Companies ---
pub mod companies {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
    #[sea_orm(table_name = "companies")]
    #[schema(as = Company)]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub code: String,
        #[sea_orm(unique)]
        pub name: String,
        pub description: Option<String>,
        /// Derived from `name` when the company is created; never recomputed.
        pub slug: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::invoices::Entity")]
        Invoices,
        #[sea_orm(has_many = "super::company_industries::Entity")]
        CompanyIndustries,
    }

    impl Related<super::invoices::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Invoices.def()
        }
    }

    impl Related<super::company_industries::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CompanyIndustries.def()
        }
    }

    impl Related<super::industries::Entity> for Entity {
        fn to() -> RelationDef {
            super::company_industries::Relation::Industry.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::company_industries::Relation::Company.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Invoices ---
pub mod invoices {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
    #[sea_orm(table_name = "invoices")]
    #[schema(as = Invoice)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub comp_code: String,
        #[sea_orm(column_type = "Double")]
        pub amt: f64,
        pub paid: bool,
        #[schema(value_type = String, format = Date)]
        pub add_date: Date,
        #[schema(value_type = Option<String>, format = Date)]
        pub paid_date: Option<Date>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::companies::Entity",
            from = "Column::CompCode",
            to = "super::companies::Column::Code",
            on_delete = "Cascade"
        )]
        Company,
    }

    impl Related<super::companies::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Company.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Industries ---
pub mod industries {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
    #[sea_orm(table_name = "industries")]
    #[schema(as = Industry)]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub code: String,
        #[sea_orm(unique)]
        pub industry: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::company_industries::Entity")]
        CompanyIndustries,
    }

    impl Related<super::company_industries::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CompanyIndustries.def()
        }
    }

    impl Related<super::companies::Entity> for Entity {
        fn to() -> RelationDef {
            super::company_industries::Relation::Company.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::company_industries::Relation::Industry.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

// --- Company <-> Industry associations ---
pub mod company_industries {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
    #[sea_orm(table_name = "company_industries")]
    #[schema(as = Association)]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub industry_code: String,
        #[sea_orm(primary_key, auto_increment = false)]
        pub comp_code: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::industries::Entity",
            from = "Column::IndustryCode",
            to = "super::industries::Column::Code",
            on_delete = "Cascade"
        )]
        Industry,
        #[sea_orm(
            belongs_to = "super::companies::Entity",
            from = "Column::CompCode",
            to = "super::companies::Column::Code",
            on_delete = "Cascade"
        )]
        Company,
    }

    impl Related<super::industries::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Industry.def()
        }
    }

    impl Related<super::companies::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Company.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
