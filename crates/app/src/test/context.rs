//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        customers::PgCustomersService,
        orders::PgOrdersService,
        products::PgProductsService,
        quotes::{PgQuotesService, QuoteSettings},
    },
    session::{Session, UserUuid},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub session: Session,
    pub products: PgProductsService,
    pub customers: PgCustomersService,
    pub orders: PgOrdersService,
    pub quotes: PgQuotesService,
}

impl TestContext {
    /// Fresh database with migrations applied and every service wired to it. Stock
    /// re-validation is on, as in production.
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            session: Session::new(UserUuid::new()),
            products: PgProductsService::new(db.clone()),
            customers: PgCustomersService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            quotes: PgQuotesService::new(db, QuoteSettings::default()),
            db: test_db,
        }
    }
}
