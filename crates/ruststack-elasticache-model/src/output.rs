//! ElastiCache response shapes.
//!
//! These wrap the resource records returned by each operation under the
//! member name the service uses in its result element.

use crate::elasticache_shape;
use crate::types::{CacheCluster, EngineDefaults, ReplicationGroup, Snapshot, Tag};

elasticache_shape! {
    /// Output for the `CreateCacheCluster` operation.
    pub struct CreateCacheClusterResult {
        "CacheCluster" cache_cluster: CacheCluster => with_cache_cluster;
    }
}

elasticache_shape! {
    /// Output for the `ModifyCacheCluster` operation.
    pub struct ModifyCacheClusterResult {
        "CacheCluster" cache_cluster: CacheCluster => with_cache_cluster;
    }
}

elasticache_shape! {
    /// Output for the `CreateReplicationGroup` operation.
    pub struct CreateReplicationGroupResult {
        "ReplicationGroup" replication_group: ReplicationGroup => with_replication_group;
    }
}

elasticache_shape! {
    /// Output for the `ModifyReplicationGroup` operation.
    pub struct ModifyReplicationGroupResult {
        "ReplicationGroup" replication_group: ReplicationGroup => with_replication_group;
    }
}

elasticache_shape! {
    /// Output for the `CreateSnapshot` operation.
    pub struct CreateSnapshotResult {
        "Snapshot" snapshot: Snapshot => with_snapshot;
    }
}

elasticache_shape! {
    /// Output for the `DescribeEngineDefaultParameters` operation.
    pub struct DescribeEngineDefaultParametersResult {
        "EngineDefaults" engine_defaults: EngineDefaults => with_engine_defaults;
    }
}

elasticache_shape! {
    /// Output for the `AddTagsToResource` operation: every tag now on the
    /// resource, not only the ones just added.
    pub struct AddTagsToResourceResult {
        "TagList" tag_list: [Tag] => with_tag_list, extend_tag_list;
    }
}
