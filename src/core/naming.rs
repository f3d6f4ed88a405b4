//! Stack and parameter naming.
//!
//! Derives the stable identifiers under which gantry addresses resources
//! in the parameter store. The scheme is a wire contract: external
//! tooling discovers parameters written by gantry by parsing the same
//! separator and component ordering, so neither may change.
//!
//! Derivation is pure. Component legality (character set, reserved
//! separator) is enforced at the configuration boundary, not here; see
//! [`crate::core::validation`].

use std::fmt;

/// Separator joining name components.
///
/// Reserved: validated name components never contain it, which keeps
/// distinct input tuples mapped to distinct names.
pub const SEPARATOR: char = '-';

/// Resource-type tag embedded in a stack name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackType {
    Vpc,
    Cluster,
    Service,
    Database,
    Pipeline,
    Bucket,
}

impl StackType {
    /// Stable lowercase token used inside derived names.
    pub fn as_str(&self) -> &'static str {
        match self {
            StackType::Vpc => "vpc",
            StackType::Cluster => "cluster",
            StackType::Service => "service",
            StackType::Database => "database",
            StackType::Pipeline => "pipeline",
            StackType::Bucket => "bucket",
        }
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one named resource within a namespace.
///
/// `namespace-type-service-environment`, e.g. `acme-database-api-dev`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackName(String);

impl StackName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one stored value: a stack name plus an attribute suffix.
///
/// e.g. `acme-database-api-dev-DatabaseMasterPassword`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the stack name for a resource.
///
/// Deterministic: identical inputs always yield the identical name.
pub fn stack_name(
    namespace: &str,
    stack_type: StackType,
    service: &str,
    environment: &str,
) -> StackName {
    StackName(format!(
        "{}{}{}{}{}{}{}",
        namespace,
        SEPARATOR,
        stack_type.as_str(),
        SEPARATOR,
        service,
        SEPARATOR,
        environment
    ))
}

/// Derive the name of one stored attribute of a resource.
pub fn parameter_name(stack: &StackName, attribute: &str) -> ParameterName {
    ParameterName(format!("{}{}{}", stack.as_str(), SEPARATOR, attribute))
}
