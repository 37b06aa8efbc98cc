//! Snapshot shapes.

use crate::elasticache_shape;
use crate::shape::Timestamp;
use crate::types::{AutomaticFailoverStatus, NodeGroupConfiguration};

elasticache_shape! {
    /// A single node captured in a snapshot.
    pub struct NodeSnapshot {
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        "NodeGroupId" node_group_id: String => with_node_group_id;
        "CacheNodeId" cache_node_id: String => with_cache_node_id;
        "NodeGroupConfiguration" node_group_configuration: NodeGroupConfiguration
            => with_node_group_configuration;
        /// Size of the snapshotted data, e.g. `10 MB`.
        "CacheSize" cache_size: String => with_cache_size;
        "CacheNodeCreateTime" cache_node_create_time: Timestamp => with_cache_node_create_time;
        "SnapshotCreateTime" snapshot_create_time: Timestamp => with_snapshot_create_time;
    }
}

elasticache_shape! {
    /// A copy of a Redis cluster or replication group at a point in time,
    /// together with the settings of its source.
    pub struct Snapshot {
        "SnapshotName" snapshot_name: String => with_snapshot_name;
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        "ReplicationGroupDescription" replication_group_description: String
            => with_replication_group_description;
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        /// `creating`, `available`, `restoring`, `copying` or `deleting`.
        "SnapshotStatus" snapshot_status: String => with_snapshot_status;
        /// `automated` or `manual`.
        "SnapshotSource" snapshot_source: String => with_snapshot_source;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "Engine" engine: String => with_engine;
        "EngineVersion" engine_version: String => with_engine_version;
        "NumCacheNodes" num_cache_nodes: i32 => with_num_cache_nodes;
        "PreferredAvailabilityZone" preferred_availability_zone: String
            => with_preferred_availability_zone;
        "CacheClusterCreateTime" cache_cluster_create_time: Timestamp
            => with_cache_cluster_create_time;
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "TopicArn" topic_arn: String => with_topic_arn;
        "Port" port: i32 => with_port;
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        "CacheSubnetGroupName" cache_subnet_group_name: String => with_cache_subnet_group_name;
        "VpcId" vpc_id: String => with_vpc_id;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        /// Retention of the source at snapshot time. Manual snapshots ignore it.
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        "NumNodeGroups" num_node_groups: i32 => with_num_node_groups;
        "AutomaticFailover" automatic_failover: AutomaticFailoverStatus
            => with_automatic_failover;
        "NodeSnapshots" node_snapshots: [NodeSnapshot] => with_node_snapshots, extend_node_snapshots;
        "KmsKeyId" kms_key_id: String => with_kms_key_id;
        "ARN" arn: String => with_arn;
    }
}
