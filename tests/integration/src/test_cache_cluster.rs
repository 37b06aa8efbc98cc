//! Cache cluster request/response integration tests.

#[cfg(test)]
mod tests {
    use ruststack_elasticache_model::input::{CreateCacheClusterRequest, ModifyCacheClusterRequest};
    use ruststack_elasticache_model::output::{CreateCacheClusterResult, ModifyCacheClusterResult};
    use ruststack_elasticache_model::types::{AZMode, CacheNode, Endpoint, Tag};
    use ruststack_elasticache_model::{ElastiCacheInput, Shape};

    use crate::{decode, encode, test_resource_id, timestamp};

    #[test]
    fn test_should_build_memcached_cluster_request() -> anyhow::Result<()> {
        let id = test_resource_id("mem");
        let mut zones = vec!["us-east-1a".to_owned(), "us-east-1b".to_owned()];

        let request = CreateCacheClusterRequest::default()
            .with_cache_cluster_id(id.as_str())
            .with_engine("memcached")
            .with_cache_node_type("cache.t3.micro")
            .with_num_cache_nodes(2)
            .with_az_mode("cross-az")
            .with_preferred_availability_zones(&zones)
            .with_port(11211)
            .extend_tags([Tag::new("owner", "")]);
        zones.clear();

        assert_eq!(request.az_mode, Some(AZMode::CrossAz));
        assert_eq!(
            request.preferred_availability_zones.as_ref().map(Vec::len),
            Some(2)
        );

        let encoded = encode(&request)?;
        assert_eq!(encoded["AZMode"], "cross-az");
        assert_eq!(encoded["Tags"][0]["Value"], "");
        assert_eq!(CreateCacheClusterRequest::OPERATION.as_str(), "CreateCacheCluster");
        Ok(())
    }

    #[test]
    fn test_should_decode_cluster_with_nodes() -> anyhow::Result<()> {
        let body = r#"{
            "CacheCluster": {
                "CacheClusterId": "mem-1",
                "ConfigurationEndpoint": {"Address": "mem-1.abc.cfg.use1.cache.amazonaws.com", "Port": 11211},
                "Engine": "memcached",
                "CacheClusterStatus": "available",
                "NumCacheNodes": 2,
                "CacheClusterCreateTime": "2020-01-01T00:00:00Z",
                "CacheSecurityGroups": [],
                "CacheParameterGroup": {
                    "CacheParameterGroupName": "default.memcached1.6",
                    "ParameterApplyStatus": "in-sync",
                    "CacheNodeIdsToReboot": []
                },
                "CacheNodes": [
                    {"CacheNodeId": "0001", "CacheNodeStatus": "available"},
                    {"CacheNodeId": "0002", "CacheNodeStatus": "available"}
                ],
                "AutoMinorVersionUpgrade": true
            }
        }"#;

        let result: CreateCacheClusterResult = decode(body)?;
        let cluster = result
            .cache_cluster
            .ok_or_else(|| anyhow::anyhow!("missing CacheCluster"))?;

        assert_eq!(
            cluster.cache_cluster_create_time,
            Some(timestamp("2020-01-01T00:00:00Z")?)
        );
        assert_eq!(cluster.cache_security_groups, Some(Vec::new()));
        assert_eq!(cluster.security_groups, None);
        assert_eq!(
            cluster
                .configuration_endpoint
                .as_ref()
                .and_then(|e| e.port),
            Some(11211)
        );
        let node_ids: Vec<&str> = cluster
            .cache_nodes
            .iter()
            .flatten()
            .filter_map(|node| node.cache_node_id.as_deref())
            .collect();
        assert_eq!(node_ids, ["0001", "0002"]);
        Ok(())
    }

    #[test]
    fn test_should_remove_nodes_on_modify() -> anyhow::Result<()> {
        let request = ModifyCacheClusterRequest::default()
            .with_cache_cluster_id("mem-1")
            .with_num_cache_nodes(1)
            .extend_cache_node_ids_to_remove(["0002"])
            .with_apply_immediately(true);

        let encoded = encode(&request)?;
        assert_eq!(encoded["CacheNodeIdsToRemove"], serde_json::json!(["0002"]));

        let body = r#"{
            "CacheCluster": {
                "CacheClusterId": "mem-1",
                "CacheClusterStatus": "modifying",
                "PendingModifiedValues": {"NumCacheNodes": 1, "CacheNodeIdsToRemove": ["0002"]}
            }
        }"#;
        let result: ModifyCacheClusterResult = decode(body)?;
        let pending = result
            .cache_cluster
            .and_then(|cluster| cluster.pending_modified_values)
            .ok_or_else(|| anyhow::anyhow!("missing pending values"))?;

        assert_eq!(pending.num_cache_nodes, request.num_cache_nodes);
        assert_eq!(pending.cache_node_ids_to_remove, request.cache_node_ids_to_remove);
        Ok(())
    }

    #[test]
    fn test_should_render_cluster_for_logs() -> anyhow::Result<()> {
        let created = timestamp("2022-06-01T10:30:00Z")?;
        let node = CacheNode::default()
            .with_cache_node_id("0001")
            .with_cache_node_create_time(created)
            .with_endpoint(
                Endpoint::default()
                    .with_address("redis-1.abc.0001.use1.cache.amazonaws.com")
                    .with_port(6379),
            );

        assert_eq!(
            node.to_string(),
            "{CacheNodeId: 0001, CacheNodeCreateTime: 2022-06-01T10:30:00Z, \
             Endpoint: {Address: redis-1.abc.0001.use1.cache.amazonaws.com, Port: 6379}}"
        );
        assert_eq!(CacheNode::SHAPE_NAME, "CacheNode");
        Ok(())
    }

    #[test]
    fn test_should_reset_member_to_unset() {
        let mut request = ModifyCacheClusterRequest::default()
            .with_cache_cluster_id("mem-1")
            .with_snapshot_retention_limit(0);
        assert_eq!(request.snapshot_retention_limit, Some(0));

        request.snapshot_retention_limit = None;
        assert_eq!(request, ModifyCacheClusterRequest::default().with_cache_cluster_id("mem-1"));
        assert_eq!(request.to_string(), "{CacheClusterId: mem-1}");
    }
}
