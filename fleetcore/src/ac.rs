pub mod agent;
pub mod grant;
pub mod page;
pub mod permission;
pub mod principal;
pub mod role;
pub mod traits;

pub use self::{
    agent::Agent,
    grant::Grant,
    page::PageKey,
    permission::{
        Level,
        PagePermission,
        ResolvedPermissions,
    },
    principal::Principal,
    role::{
        Role,
        Roles,
    },
};
