//! Service fault integration tests.

#[cfg(test)]
mod tests {
    use ruststack_elasticache_model::elasticache_error;
    use ruststack_elasticache_model::{ElastiCacheError, ElastiCacheErrorCode};

    fn fault(code: &str, message: &str, request_id: &str) -> anyhow::Result<ElastiCacheError> {
        let err = ElastiCacheError::from_code(code, message)
            .ok_or_else(|| anyhow::anyhow!("unrecognized fault code {code}"))?
            .with_request_id(request_id);
        tracing::debug!(%err, "decoded fault");
        Ok(err)
    }

    #[test]
    fn test_should_map_fault_response_to_error() -> anyhow::Result<()> {
        let err = fault(
            "ReplicationGroupNotFoundFault",
            "ReplicationGroup my-repl-group not found.",
            "5b4a9c2e",
        )?;

        assert_eq!(err.code, ElastiCacheErrorCode::ReplicationGroupNotFound);
        assert!(err.is_not_found());
        assert_eq!(err.status_code.as_u16(), 404);
        assert_eq!(err.request_id.as_deref(), Some("5b4a9c2e"));
        Ok(())
    }

    #[test]
    fn test_should_reject_unknown_fault_code() {
        assert!(fault("Throttling", "Rate exceeded", "1").is_err());
    }

    #[test]
    fn test_should_propagate_through_anyhow() {
        fn create_group() -> anyhow::Result<()> {
            Err(elasticache_error!(
                ReplicationGroupAlreadyExists,
                "Replication group already exists"
            )
            .into())
        }

        let err = create_group().expect_err("should fail");
        let fault = err
            .downcast_ref::<ElastiCacheError>()
            .expect("ElastiCacheError");
        assert_eq!(fault.code.as_str(), "ReplicationGroupAlreadyExists");
        assert_eq!(
            err.to_string(),
            "ElastiCacheError(ReplicationGroupAlreadyExists): Replication group already exists"
        );
    }
}
