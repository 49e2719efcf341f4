//! SeaORM entities for database tables

/// Venues table
pub mod venue {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "venues")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub city: String,
        pub state: String,
        pub address: String,
        pub phone: Option<String>,
        pub image_link: Option<String>,
        /// JSON array of genre names
        pub genres: Json,
        pub facebook_link: Option<String>,
        pub website: Option<String>,
        pub seeking_talent: bool,
        pub seeking_description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Shows hosted here; removed with the venue
        #[sea_orm(has_many = "super::show::Entity")]
        Shows,
    }

    impl Related<super::show::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Shows.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Artists table
pub mod artist {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "artists")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub city: String,
        pub state: String,
        pub phone: Option<String>,
        /// JSON array of genre names
        pub genres: Json,
        pub image_link: Option<String>,
        pub facebook_link: Option<String>,
        pub website: Option<String>,
        pub seeking_venues: bool,
        pub seeking_description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Shows played; removed with the artist
        #[sea_orm(has_many = "super::show::Entity")]
        Shows,
    }

    impl Related<super::show::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Shows.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Shows table: artist ↔ venue association with a start time
pub mod show {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "shows")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub artist_id: i32,
        pub venue_id: i32,
        pub start_time: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::artist::Entity",
            from = "Column::ArtistId",
            to = "super::artist::Column::Id",
            on_delete = "Cascade"
        )]
        Artist,
        #[sea_orm(
            belongs_to = "super::venue::Entity",
            from = "Column::VenueId",
            to = "super::venue::Column::Id",
            on_delete = "Cascade"
        )]
        Venue,
    }

    impl Related<super::artist::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Artist.def()
        }
    }

    impl Related<super::venue::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Venue.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
