//! Engine default parameter shapes.

use crate::elasticache_shape;
use crate::types::ChangeType;

elasticache_shape! {
    /// A single engine parameter.
    pub struct Parameter {
        "ParameterName" parameter_name: String => with_parameter_name;
        "ParameterValue" parameter_value: String => with_parameter_value;
        "Description" description: String => with_description;
        /// Where the value came from, e.g. `system` or `user`.
        "Source" source: String => with_source;
        "DataType" data_type: String => with_data_type;
        /// The accepted range, as free text (`1-100`, `yes,no`).
        "AllowedValues" allowed_values: String => with_allowed_values;
        "IsModifiable" is_modifiable: bool => with_is_modifiable;
        "MinimumEngineVersion" minimum_engine_version: String => with_minimum_engine_version;
        "ChangeType" change_type: ChangeType => with_change_type;
    }
}

elasticache_shape! {
    /// The value of a node-type-specific parameter for one node type.
    pub struct CacheNodeTypeSpecificValue {
        "CacheNodeType" cache_node_type: String => with_cache_node_type;
        "Value" value: String => with_value;
    }
}

elasticache_shape! {
    /// A parameter whose value depends on the cache node type.
    pub struct CacheNodeTypeSpecificParameter {
        "ParameterName" parameter_name: String => with_parameter_name;
        "Description" description: String => with_description;
        "Source" source: String => with_source;
        "DataType" data_type: String => with_data_type;
        "AllowedValues" allowed_values: String => with_allowed_values;
        "IsModifiable" is_modifiable: bool => with_is_modifiable;
        "MinimumEngineVersion" minimum_engine_version: String => with_minimum_engine_version;
        "CacheNodeTypeSpecificValues" cache_node_type_specific_values: [CacheNodeTypeSpecificValue]
            => with_cache_node_type_specific_values, extend_cache_node_type_specific_values;
        "ChangeType" change_type: ChangeType => with_change_type;
    }
}

elasticache_shape! {
    /// The default parameters of one cache parameter group family.
    pub struct EngineDefaults {
        /// E.g. `memcached1.6` or `redis6.x`.
        "CacheParameterGroupFamily" cache_parameter_group_family: String
            => with_cache_parameter_group_family;
        /// Pagination marker for the next page, if any.
        "Marker" marker: String => with_marker;
        "Parameters" parameters: [Parameter] => with_parameters, extend_parameters;
        "CacheNodeTypeSpecificParameters" cache_node_type_specific_parameters:
            [CacheNodeTypeSpecificParameter]
            => with_cache_node_type_specific_parameters, extend_cache_node_type_specific_parameters;
    }
}

impl EngineDefaults {
    /// Looks up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .as_deref()?
            .iter()
            .find(|p| p.parameter_name.as_deref() == Some(name))
    }
}
