//! ElastiCache shared and resource shapes.

mod cache_cluster;
mod common;
mod engine_defaults;
mod enums;
mod replication_group;
mod snapshot;

pub use cache_cluster::{CacheCluster, CacheNode, CacheParameterGroupStatus, PendingModifiedValues};
pub use common::{
    CacheSecurityGroupMembership, Endpoint, NotificationConfiguration, SecurityGroupMembership, Tag,
};
pub use engine_defaults::{
    CacheNodeTypeSpecificParameter, CacheNodeTypeSpecificValue, EngineDefaults, Parameter,
};
pub use enums::{
    AZMode, AuthTokenUpdateStatus, AuthTokenUpdateStrategyType, AutomaticFailoverStatus,
    ChangeType, MultiAZStatus, PendingAutomaticFailoverStatus,
};
pub use replication_group::{
    GlobalReplicationGroupInfo, NodeGroup, NodeGroupConfiguration, NodeGroupMember,
    ReplicationGroup, ReplicationGroupPendingModifiedValues, ReshardingStatus, SlotMigration,
};
pub use snapshot::{NodeSnapshot, Snapshot};
