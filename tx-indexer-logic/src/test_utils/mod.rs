use blockscout_service_launcher::test_database::TestDbGuard;

pub mod builder;
pub mod in_memory_repository;
pub mod mock_node;

pub async fn init_db(name: &str) -> TestDbGuard {
    TestDbGuard::new::<migration::Migrator>(name).await
}
