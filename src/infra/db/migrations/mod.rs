//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20241109_000001_create_users_table;
mod m20241109_000002_create_wallets_table;
mod m20241109_000003_create_expenses_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241109_000001_create_users_table::Migration),
            Box::new(m20241109_000002_create_wallets_table::Migration),
            Box::new(m20241109_000003_create_expenses_table::Migration),
        ]
    }
}
