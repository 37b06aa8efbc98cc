//! Cache cluster shapes: the cluster itself, its nodes, and staged changes.

use crate::elasticache_shape;
use crate::shape::Timestamp;
use crate::types::{
    AuthTokenUpdateStatus, CacheSecurityGroupMembership, Endpoint, NotificationConfiguration,
    SecurityGroupMembership,
};

elasticache_shape! {
    /// Settings applied to a cluster at its next maintenance window, or being
    /// applied now.
    pub struct PendingModifiedValues {
        /// The new number of cache nodes. Redis clusters always have 1; Memcached
        /// clusters 1 to 20.
        "NumCacheNodes" num_cache_nodes: i32 => with_num_cache_nodes;
        /// Node IDs (`0001`, `0002`, ...) that will be removed.
        "CacheNodeIdsToRemove" cache_node_ids_to_remove: [String]
            => with_cache_node_ids_to_remove, extend_cache_node_ids_to_remove;
        "EngineVersion" engine_version: String => with_engine_version;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "AuthTokenStatus" auth_token_status: AuthTokenUpdateStatus => with_auth_token_status;
    }
}

elasticache_shape! {
    /// The status of the cache parameter group attached to a cluster.
    pub struct CacheParameterGroupStatus {
        "CacheParameterGroupName" cache_parameter_group_name: String
            => with_cache_parameter_group_name;
        /// `in-sync`, `pending-reboot`, or `applying`.
        "ParameterApplyStatus" parameter_apply_status: String => with_parameter_apply_status;
        /// Node IDs that must be rebooted for pending parameter changes to apply.
        "CacheNodeIdsToReboot" cache_node_ids_to_reboot: [String]
            => with_cache_node_ids_to_reboot, extend_cache_node_ids_to_reboot;
    }
}

elasticache_shape! {
    /// A single cache node inside a cluster.
    pub struct CacheNode {
        /// The node identifier, a zero-padded number such as `0001`.
        "CacheNodeId" cache_node_id: String => with_cache_node_id;
        "CacheNodeStatus" cache_node_status: String => with_cache_node_status;
        "CacheNodeCreateTime" cache_node_create_time: Timestamp => with_cache_node_create_time;
        "Endpoint" endpoint: Endpoint => with_endpoint;
        "ParameterGroupStatus" parameter_group_status: String => with_parameter_group_status;
        /// The primary node this read replica replicates from, if any.
        "SourceCacheNodeId" source_cache_node_id: String => with_source_cache_node_id;
        "CustomerAvailabilityZone" customer_availability_zone: String
            => with_customer_availability_zone;
    }
}

elasticache_shape! {
    /// All attributes of a specific cache cluster.
    pub struct CacheCluster {
        /// The user-supplied identifier of the cluster.
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        /// The Memcached configuration endpoint (always contains `.cfg`).
        "ConfigurationEndpoint" configuration_endpoint: Endpoint => with_configuration_endpoint;
        "ClientDownloadLandingPage" client_download_landing_page: String
            => with_client_download_landing_page;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        /// `memcached` or `redis`.
        "Engine" engine: String => with_engine;
        "EngineVersion" engine_version: String => with_engine_version;
        /// `available`, `creating`, `deleted`, `deleting`, `incompatible-network`,
        /// `modifying`, `rebooting cluster nodes`, `restore-failed` or
        /// `snapshotting`.
        "CacheClusterStatus" cache_cluster_status: String => with_cache_cluster_status;
        "NumCacheNodes" num_cache_nodes: i32 => with_num_cache_nodes;
        /// The zone name, or `Multiple` when nodes span zones.
        "PreferredAvailabilityZone" preferred_availability_zone: String
            => with_preferred_availability_zone;
        "CacheClusterCreateTime" cache_cluster_create_time: Timestamp
            => with_cache_cluster_create_time;
        /// Weekly window in `ddd:hh24:mi-ddd:hh24:mi` (UTC), at least 60 minutes.
        "PreferredMaintenanceWindow" preferred_maintenance_window: String
            => with_preferred_maintenance_window;
        "PendingModifiedValues" pending_modified_values: PendingModifiedValues
            => with_pending_modified_values;
        "NotificationConfiguration" notification_configuration: NotificationConfiguration
            => with_notification_configuration;
        "CacheSecurityGroups" cache_security_groups: [CacheSecurityGroupMembership]
            => with_cache_security_groups, extend_cache_security_groups;
        "CacheParameterGroup" cache_parameter_group: CacheParameterGroupStatus
            => with_cache_parameter_group;
        "CacheSubnetGroupName" cache_subnet_group_name: String => with_cache_subnet_group_name;
        "CacheNodes" cache_nodes: [CacheNode] => with_cache_nodes, extend_cache_nodes;
        "AutoMinorVersionUpgrade" auto_minor_version_upgrade: bool
            => with_auto_minor_version_upgrade;
        "SecurityGroups" security_groups: [SecurityGroupMembership]
            => with_security_groups, extend_security_groups;
        /// Unset when the cluster is not part of a replication group.
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        /// Days automatic snapshots are kept; `0` turns backups off.
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        /// Daily snapshot window in UTC, e.g. `05:00-09:00`.
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        "AuthTokenEnabled" auth_token_enabled: bool => with_auth_token_enabled;
        "AuthTokenLastModifiedDate" auth_token_last_modified_date: Timestamp
            => with_auth_token_last_modified_date;
        "TransitEncryptionEnabled" transit_encryption_enabled: bool
            => with_transit_encryption_enabled;
        "AtRestEncryptionEnabled" at_rest_encryption_enabled: bool
            => with_at_rest_encryption_enabled;
    }
}
