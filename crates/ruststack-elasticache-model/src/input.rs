//! ElastiCache request shapes.
//!
//! Each request is a plain record of optional members; nothing here is
//! validated before the request leaves the caller. Wire names follow the
//! ElastiCache API (`2015-02-02`) member names.

use crate::elasticache_shape;
use crate::operations::{ElastiCacheInput, ElastiCacheOperation};
use crate::types::{AZMode, AuthTokenUpdateStrategyType, NodeGroupConfiguration, Tag};

// ---------------------------------------------------------------------------
// Cache clusters
// ---------------------------------------------------------------------------

elasticache_shape! {
    /// Input for the `CreateCacheCluster` operation.
    ///
    /// Creates a Memcached cluster, or a single-node Redis cluster (optionally
    /// added as a read replica to an existing replication group).
    pub struct CreateCacheClusterRequest {
        /// Lowercase identifier of 1 to 50 letters, digits or hyphens, starting
        /// with a letter.
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        /// Adds the cluster to this replication group as a read replica.
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        /// Memcached only.
        "AZMode" az_mode: AZMode => with_az_mode;
        "PreferredAvailabilityZone" preferred_availability_zone: String
            => with_preferred_availability_zone;
        /// One zone per node; the count must match `NumCacheNodes`.
        "PreferredAvailabilityZones" preferred_availability_zones: [String]
            => with_preferred_availability_zones, extend_preferred_availability_zones;
        "NumCacheNodes" num_cache_nodes: i32 => with_num_cache_nodes;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "Engine" engine: String => with_engine;
        "EngineVersion" engine_version: String => with_engine_version;
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        "CacheSubnetGroupName" cache_subnet_group_name: String => with_cache_subnet_group_name;
        "CacheSecurityGroupNames" cache_security_group_names: [String]
            => with_cache_security_group_names, extend_cache_security_group_names;
        "SecurityGroupIds" security_group_ids: [String]
            => with_security_group_ids, extend_security_group_ids;
        "Tags" tags: [Tag] => with_tags, extend_tags;
        /// S3 ARNs of RDB snapshot files to seed a Redis cluster from.
        "SnapshotArns" snapshot_arns: [String] => with_snapshot_arns, extend_snapshot_arns;
        "SnapshotName" snapshot_name: String => with_snapshot_name;
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "Port" port: i32 => with_port;
        "NotificationTopicArn" notification_topic_arn: String => with_notification_topic_arn;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        /// Redis password; requires transit encryption on the server side.
        "AuthToken" auth_token: String => with_auth_token;
    }
}

elasticache_shape! {
    /// Input for the `ModifyCacheCluster` operation.
    pub struct ModifyCacheClusterRequest {
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        /// Lower than the current count removes the nodes named in
        /// `CacheNodeIdsToRemove`.
        "NumCacheNodes" num_cache_nodes: i32 => with_num_cache_nodes;
        "CacheNodeIdsToRemove" cache_node_ids_to_remove: [String]
            => with_cache_node_ids_to_remove, extend_cache_node_ids_to_remove;
        "AZMode" az_mode: AZMode => with_az_mode;
        "NewAvailabilityZones" new_availability_zones: [String]
            => with_new_availability_zones, extend_new_availability_zones;
        "CacheSecurityGroupNames" cache_security_group_names: [String]
            => with_cache_security_group_names, extend_cache_security_group_names;
        "SecurityGroupIds" security_group_ids: [String]
            => with_security_group_ids, extend_security_group_ids;
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "NotificationTopicArn" notification_topic_arn: String => with_notification_topic_arn;
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        /// `active` or `inactive`.
        "NotificationTopicStatus" notification_topic_status: String
            => with_notification_topic_status;
        /// Apply now instead of at the next maintenance window.
        "ApplyImmediately" apply_immediately: bool => with_apply_immediately;
        "EngineVersion" engine_version: String => with_engine_version;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "AuthToken" auth_token: String => with_auth_token;
        "AuthTokenUpdateStrategy" auth_token_update_strategy: AuthTokenUpdateStrategyType
            => with_auth_token_update_strategy;
    }
}

// ---------------------------------------------------------------------------
// Replication groups
// ---------------------------------------------------------------------------

elasticache_shape! {
    /// Input for the `CreateReplicationGroup` operation.
    ///
    /// Creates a Redis replication group: either cluster mode disabled (one
    /// shard, `NumCacheClusters` nodes) or cluster mode enabled
    /// (`NumNodeGroups` shards of `ReplicasPerNodeGroup` replicas each).
    pub struct CreateReplicationGroupRequest {
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        "ReplicationGroupDescription" replication_group_description: String
            => with_replication_group_description;
        "GlobalReplicationGroupId" global_replication_group_id: String
            => with_global_replication_group_id;
        /// An existing cluster to use as the primary.
        "PrimaryClusterId" primary_cluster_id: String => with_primary_cluster_id;
        "AutomaticFailoverEnabled" automatic_failover_enabled: bool
            => with_automatic_failover_enabled;
        "MultiAZEnabled" multi_az_enabled: bool => with_multi_az_enabled;
        /// Cluster-mode-disabled node count, 1 to 6.
        "NumCacheClusters" num_cache_clusters: i32 => with_num_cache_clusters;
        "PreferredCacheClusterAZs" preferred_cache_cluster_azs: [String]
            => with_preferred_cache_cluster_azs, extend_preferred_cache_cluster_azs;
        "NumNodeGroups" num_node_groups: i32 => with_num_node_groups;
        "ReplicasPerNodeGroup" replicas_per_node_group: i32 => with_replicas_per_node_group;
        "NodeGroupConfiguration" node_group_configuration: [NodeGroupConfiguration]
            => with_node_group_configuration, extend_node_group_configuration;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "Engine" engine: String => with_engine;
        "EngineVersion" engine_version: String => with_engine_version;
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        "CacheSubnetGroupName" cache_subnet_group_name: String => with_cache_subnet_group_name;
        "CacheSecurityGroupNames" cache_security_group_names: [String]
            => with_cache_security_group_names, extend_cache_security_group_names;
        "SecurityGroupIds" security_group_ids: [String]
            => with_security_group_ids, extend_security_group_ids;
        "Tags" tags: [Tag] => with_tags, extend_tags;
        "SnapshotArns" snapshot_arns: [String] => with_snapshot_arns, extend_snapshot_arns;
        "SnapshotName" snapshot_name: String => with_snapshot_name;
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "Port" port: i32 => with_port;
        "NotificationTopicArn" notification_topic_arn: String => with_notification_topic_arn;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        "AuthToken" auth_token: String => with_auth_token;
        /// Can only be chosen at creation time.
        "TransitEncryptionEnabled" transit_encryption_enabled: bool
            => with_transit_encryption_enabled;
        /// Can only be chosen at creation time.
        "AtRestEncryptionEnabled" at_rest_encryption_enabled: bool
            => with_at_rest_encryption_enabled;
        "KmsKeyId" kms_key_id: String => with_kms_key_id;
    }
}

elasticache_shape! {
    /// Input for the `ModifyReplicationGroup` operation.
    pub struct ModifyReplicationGroupRequest {
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        "ReplicationGroupDescription" replication_group_description: String
            => with_replication_group_description;
        "PrimaryClusterId" primary_cluster_id: String => with_primary_cluster_id;
        /// The cluster whose nodes snapshots are taken from.
        "SnapshottingClusterId" snapshotting_cluster_id: String
            => with_snapshotting_cluster_id;
        "AutomaticFailoverEnabled" automatic_failover_enabled: bool
            => with_automatic_failover_enabled;
        "MultiAZEnabled" multi_az_enabled: bool => with_multi_az_enabled;
        /// Deprecated by the service; accepted but ignored.
        "NodeGroupId" node_group_id: String => with_node_group_id;
        "CacheSecurityGroupNames" cache_security_group_names: [String]
            => with_cache_security_group_names, extend_cache_security_group_names;
        "SecurityGroupIds" security_group_ids: [String]
            => with_security_group_ids, extend_security_group_ids;
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "NotificationTopicArn" notification_topic_arn: String => with_notification_topic_arn;
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        "NotificationTopicStatus" notification_topic_status: String
            => with_notification_topic_status;
        "ApplyImmediately" apply_immediately: bool => with_apply_immediately;
        "EngineVersion" engine_version: String => with_engine_version;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "AuthToken" auth_token: String => with_auth_token;
        "AuthTokenUpdateStrategy" auth_token_update_strategy: AuthTokenUpdateStrategyType
            => with_auth_token_update_strategy;
    }
}

// ---------------------------------------------------------------------------
// Snapshots, parameters and tags
// ---------------------------------------------------------------------------

elasticache_shape! {
    /// Input for the `CreateSnapshot` operation. Exactly one of
    /// `ReplicationGroupId` or `CacheClusterId` is expected by the service.
    pub struct CreateSnapshotRequest {
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        "SnapshotName" snapshot_name: String => with_snapshot_name;
        "KmsKeyId" kms_key_id: String => with_kms_key_id;
    }
}

elasticache_shape! {
    /// Input for the `DescribeEngineDefaultParameters` operation.
    pub struct DescribeEngineDefaultParametersRequest {
        "CacheParameterGroupFamily" cache_parameter_group_family: String
            => with_cache_parameter_group_family;
        /// Page size, 20 to 100. The service defaults to 100.
        "MaxRecords" max_records: i32 => with_max_records;
        "Marker" marker: String => with_marker;
    }
}

elasticache_shape! {
    /// Input for the `AddTagsToResource` operation.
    pub struct AddTagsToResourceRequest {
        /// ARN of the cluster or snapshot to tag.
        "ResourceName" resource_name: String => with_resource_name;
        "Tags" tags: [Tag] => with_tags, extend_tags;
    }
}

macro_rules! impl_input {
    ($($request:ident => $operation:ident),* $(,)?) => {
        $(
            impl ElastiCacheInput for $request {
                const OPERATION: ElastiCacheOperation = ElastiCacheOperation::$operation;
            }
        )*
    };
}

impl_input! {
    CreateCacheClusterRequest => CreateCacheCluster,
    ModifyCacheClusterRequest => ModifyCacheCluster,
    CreateReplicationGroupRequest => CreateReplicationGroup,
    ModifyReplicationGroupRequest => ModifyReplicationGroup,
    CreateSnapshotRequest => CreateSnapshot,
    DescribeEngineDefaultParametersRequest => DescribeEngineDefaultParameters,
    AddTagsToResourceRequest => AddTagsToResource,
}
