//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use payment_groups_types::{
        CreatePaymentGroupRequest, PaymentGroupId, PaymentGroupRepository,
        UpdatePaymentGroupRequest,
    };

    use crate::{Repo, SqliteRepo, build_repo};

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn create_req(name: &str) -> CreatePaymentGroupRequest {
        CreatePaymentGroupRequest {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_group() {
        let repo = setup_repo().await;

        let group = repo
            .create(CreatePaymentGroupRequest {
                name: "Payroll".to_string(),
                description: Some("Monthly salaries".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(group.name, "Payroll");
        assert_eq!(group.description.as_deref(), Some("Monthly salaries"));
        assert_eq!(group.created_at, group.updated_at);
    }

    #[tokio::test]
    async fn test_keys_are_assigned_in_insert_order() {
        let repo = setup_repo().await;

        let first = repo.create(create_req("A")).await.unwrap();
        let second = repo.create(create_req("B")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_repo().await;
        let created = repo.create(create_req("Payroll")).await.unwrap();

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = setup_repo().await;

        let result = repo.find_by_id(PaymentGroupId::new(99)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_orders_by_id() {
        let repo = setup_repo().await;
        let a = repo.create(create_req("Vendors")).await.unwrap();
        let b = repo.create(create_req("Payroll")).await.unwrap();

        let groups = repo.find_all().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, a.id);
        assert_eq!(groups[1].id, b.id);
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = setup_repo().await;

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_only_touches_given_fields() {
        let repo = setup_repo().await;
        let created = repo
            .create(CreatePaymentGroupRequest {
                name: "Payroll".to_string(),
                description: Some("Monthly".to_string()),
            })
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                UpdatePaymentGroupRequest {
                    name: Some("Salaries".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Salaries");
        assert_eq!(updated.description.as_deref(), Some("Monthly"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Salaries");
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let repo = setup_repo().await;

        let result = repo
            .update(PaymentGroupId::new(7), UpdatePaymentGroupRequest::default())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_repo().await;
        let created = repo.create(create_req("Payroll")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_from_pool_with_schema() {
        let pool = sqlx::SqlitePool::connect("sqlite::memory:").await.unwrap();
        let repo = SqliteRepo::from_pool(pool);
        repo.create_schema().await.unwrap();

        let created = repo.create(create_req("Payroll")).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_build_repo_picks_sqlite() {
        let repo = build_repo("sqlite::memory:").await.unwrap();
        assert!(matches!(repo, Repo::Sqlite(_)));

        let created = repo.create(create_req("Payroll")).await.unwrap();
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_build_repo_rejects_unknown_scheme() {
        let result = build_repo("mysql://localhost/payment_groups").await;

        assert!(result.is_err());
    }
}
