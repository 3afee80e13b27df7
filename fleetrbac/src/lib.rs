//! Permission resolution for the fleet admin application.
//!
//! Resolution merges the roles held by an agent with the system wide
//! grant table into a [`ResolvedPermissions`] covering every page.  The
//! merge is a plain union: holding an additional role never removes
//! access, and the order of the grant rows does not matter.  A super
//! admin bypasses the grant table entirely.
//!
//! [`ResolvedPermissions`]: fleetcore::ac::ResolvedPermissions

pub mod enforcer;
pub mod error;
pub mod resolution;
pub mod resolver;

pub use enforcer::PermissionEnforcer;
pub use resolution::{
    PermissionStatus,
    Resolution,
};
pub use resolver::{
    resolve,
    Resolver,
};
