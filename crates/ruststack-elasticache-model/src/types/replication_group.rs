//! Replication group shapes: the group, its shards (node groups), and the
//! shard layout supplied at creation time.

use crate::elasticache_shape;
use crate::shape::{Double, Timestamp};
use crate::types::{
    AuthTokenUpdateStatus, AutomaticFailoverStatus, Endpoint, MultiAZStatus,
    PendingAutomaticFailoverStatus,
};

elasticache_shape! {
    /// Layout of one node group (shard) requested when creating a replication
    /// group.
    pub struct NodeGroupConfiguration {
        /// Four-digit shard identifier, e.g. `0001`.
        "NodeGroupId" node_group_id: String => with_node_group_id;
        /// Keyspace of the shard as a range such as `0-3999`.
        "Slots" slots: String => with_slots;
        "ReplicaCount" replica_count: i32 => with_replica_count;
        "PrimaryAvailabilityZone" primary_availability_zone: String
            => with_primary_availability_zone;
        "ReplicaAvailabilityZones" replica_availability_zones: [String]
            => with_replica_availability_zones, extend_replica_availability_zones;
    }
}

elasticache_shape! {
    /// The global datastore a replication group belongs to.
    pub struct GlobalReplicationGroupInfo {
        "GlobalReplicationGroupId" global_replication_group_id: String
            => with_global_replication_group_id;
        /// `PRIMARY` or `SECONDARY`.
        "GlobalReplicationGroupMemberRole" global_replication_group_member_role: String
            => with_global_replication_group_member_role;
    }
}

elasticache_shape! {
    /// Progress of an online resharding slot migration.
    pub struct SlotMigration {
        "ProgressPercentage" progress_percentage: Double => with_progress_percentage;
    }
}

elasticache_shape! {
    /// Status of an online resharding operation.
    pub struct ReshardingStatus {
        "SlotMigration" slot_migration: SlotMigration => with_slot_migration;
    }
}

elasticache_shape! {
    /// Replication group settings that are being applied or will be applied at
    /// the next maintenance window.
    pub struct ReplicationGroupPendingModifiedValues {
        /// The primary cluster ID applied to the group at the next window.
        "PrimaryClusterId" primary_cluster_id: String => with_primary_cluster_id;
        "AutomaticFailoverStatus" automatic_failover_status: PendingAutomaticFailoverStatus
            => with_automatic_failover_status;
        "Resharding" resharding: ReshardingStatus => with_resharding;
        "AuthTokenStatus" auth_token_status: AuthTokenUpdateStatus => with_auth_token_status;
    }
}

elasticache_shape! {
    /// A single node within a node group (shard).
    pub struct NodeGroupMember {
        "CacheClusterId" cache_cluster_id: String => with_cache_cluster_id;
        "CacheNodeId" cache_node_id: String => with_cache_node_id;
        "ReadEndpoint" read_endpoint: Endpoint => with_read_endpoint;
        "PreferredAvailabilityZone" preferred_availability_zone: String
            => with_preferred_availability_zone;
        /// `primary` or `replica`. Only reported for cluster-mode-disabled groups.
        "CurrentRole" current_role: String => with_current_role;
    }
}

elasticache_shape! {
    /// A node group (shard): one primary plus up to five read replicas.
    pub struct NodeGroup {
        "NodeGroupId" node_group_id: String => with_node_group_id;
        /// `creating`, `available`, `modifying`, `deleting` and so on.
        "Status" status: String => with_status;
        "PrimaryEndpoint" primary_endpoint: Endpoint => with_primary_endpoint;
        "ReaderEndpoint" reader_endpoint: Endpoint => with_reader_endpoint;
        "Slots" slots: String => with_slots;
        "NodeGroupMembers" node_group_members: [NodeGroupMember]
            => with_node_group_members, extend_node_group_members;
    }
}

elasticache_shape! {
    /// All attributes of a specific Redis replication group.
    pub struct ReplicationGroup {
        "ReplicationGroupId" replication_group_id: String => with_replication_group_id;
        /// The user-supplied description of the group.
        "Description" description: String => with_description;
        "GlobalReplicationGroupInfo" global_replication_group_info: GlobalReplicationGroupInfo
            => with_global_replication_group_info;
        /// `creating`, `available`, `modifying`, `deleting`, `create-failed` or
        /// `snapshotting`.
        "Status" status: String => with_status;
        "PendingModifiedValues" pending_modified_values: ReplicationGroupPendingModifiedValues
            => with_pending_modified_values;
        /// Identifiers of every cluster in the group.
        "MemberClusters" member_clusters: [String]
            => with_member_clusters, extend_member_clusters;
        /// One entry per shard. Cluster-mode-disabled groups have exactly one.
        "NodeGroups" node_groups: [NodeGroup] => with_node_groups, extend_node_groups;
        "SnapshottingClusterId" snapshotting_cluster_id: String
            => with_snapshotting_cluster_id;
        "AutomaticFailover" automatic_failover: AutomaticFailoverStatus
            => with_automatic_failover;
        "MultiAZ" multi_az: MultiAZStatus => with_multi_az;
        /// Only set when cluster mode is enabled.
        "ConfigurationEndpoint" configuration_endpoint: Endpoint => with_configuration_endpoint;
        /// Days automatic snapshots are kept; `0` turns backups off.
        "SnapshotRetentionLimit" snapshot_retention_limit: i32 => with_snapshot_retention_limit;
        "SnapshotWindow" snapshot_window: String => with_snapshot_window;
        /// Whether the group is sharded across several node groups.
        "ClusterEnabled" cluster_enabled: bool => with_cluster_enabled;
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "AuthTokenEnabled" auth_token_enabled: bool => with_auth_token_enabled;
        "AuthTokenLastModifiedDate" auth_token_last_modified_date: Timestamp
            => with_auth_token_last_modified_date;
        "TransitEncryptionEnabled" transit_encryption_enabled: bool
            => with_transit_encryption_enabled;
        "AtRestEncryptionEnabled" at_rest_encryption_enabled: bool
            => with_at_rest_encryption_enabled;
        "KmsKeyId" kms_key_id: String => with_kms_key_id;
        "ARN" arn: String => with_arn;
    }
}

impl NodeGroup {
    /// Returns the member currently acting as primary, if one is reported.
    #[must_use]
    pub fn primary_member(&self) -> Option<&NodeGroupMember> {
        self.node_group_members
            .as_deref()?
            .iter()
            .find(|member| member.current_role.as_deref() == Some("primary"))
    }
}
