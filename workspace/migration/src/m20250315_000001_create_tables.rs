use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // 2. Create locations table
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::City).string().not_null().unique_key())
                    .col(ColumnDef::new(Locations::State).string().not_null().unique_key())
                    .col(ColumnDef::new(Locations::Country).string().not_null().unique_key())
                    .col(ColumnDef::new(Locations::Pincode).string().not_null().unique_key())
                    .col(ColumnDef::new(Locations::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Locations::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // 3. Create event_categories table
        manager
            .create_table(
                Table::create()
                    .table(EventCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventCategories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EventCategories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Create events table referencing categories and locations
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Events::Name).string().not_null())
                    .col(ColumnDef::new(Events::DisplayPicture).string())
                    .col(ColumnDef::new(Events::Description).text())
                    .col(ColumnDef::new(Events::HostedFrom).date_time().not_null())
                    .col(ColumnDef::new(Events::HostedTo).date_time().not_null())
                    .col(ColumnDef::new(Events::Venue).string().not_null())
                    .col(
                        ColumnDef::new(Events::TicketAmount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Events::Status)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Events::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(Events::TicketsBooked)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Events::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Events::LocationId).integer().not_null())
                    .col(ColumnDef::new(Events::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Events::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-events-category_id")
                            .from(Events::Table, Events::CategoryId)
                            .to(EventCategories::Table, EventCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-events-location_id")
                            .from(Events::Table, Events::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order so foreign keys resolve
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    FirstName,
    LastName,
    PhoneNumber,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Locations {
    #[sea_orm(iden = "locations")]
    Table,
    Id,
    City,
    State,
    Country,
    Pincode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EventCategories {
    #[sea_orm(iden = "event_categories")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Events {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    Name,
    DisplayPicture,
    Description,
    HostedFrom,
    HostedTo,
    Venue,
    TicketAmount,
    Status,
    Capacity,
    TicketsBooked,
    CategoryId,
    LocationId,
    CreatedAt,
    UpdatedAt,
}
