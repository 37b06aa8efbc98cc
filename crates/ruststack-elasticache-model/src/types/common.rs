//! Small leaf shapes referenced from many records.

use crate::elasticache_shape;

elasticache_shape! {
    /// The address and port a cache node or replication group listens on.
    pub struct Endpoint {
        /// The DNS hostname of the cache node.
        "Address" address: String => with_address;
        /// The port number the cache engine listens on.
        "Port" port: i32 => with_port;
    }
}

elasticache_shape! {
    /// A cost allocation tag.
    pub struct Tag {
        /// The tag key. Must not be empty on the server side.
        "Key" key: String => with_key;
        /// The tag value. May be empty.
        "Value" value: String => with_value;
    }
}

elasticache_shape! {
    /// Where the cluster publishes its event notifications.
    pub struct NotificationConfiguration {
        /// The Amazon SNS topic ARN.
        "TopicArn" topic_arn: String => with_topic_arn;
        /// `active` or `inactive`; not validated locally.
        "TopicStatus" topic_status: String => with_topic_status;
    }
}

elasticache_shape! {
    /// A cache security group a cluster belongs to.
    pub struct CacheSecurityGroupMembership {
        "CacheSecurityGroupName" cache_security_group_name: String => with_cache_security_group_name;
        /// `active`, or `modifying` while the membership is being changed.
        "Status" status: String => with_status;
    }
}

elasticache_shape! {
    /// A VPC security group a cluster belongs to.
    pub struct SecurityGroupMembership {
        "SecurityGroupId" security_group_id: String => with_security_group_id;
        "Status" status: String => with_status;
    }
}

impl Tag {
    /// Builds a tag from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}
