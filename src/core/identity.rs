//! Owner and group name resolution.
//!
//! The long listing only needs a name for a uid/gid. [IdentityResolver] is the seam;
//! [SystemIdentity] answers from the passwd/group databases (cached per run),
//! tests plug in their own resolver.

use crate::core::errors::ListError;

/// Resolves numeric user and group ids to names.
pub trait IdentityResolver {
    fn owner_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// Name for `uid`, or the number itself when the id has no mapped name.
pub fn owner_or_id(resolver: &dyn IdentityResolver, uid: u32) -> String {
    resolver
        .owner_name(uid)
        .unwrap_or_else(|| numeric_fallback(uid))
}

/// Name for `gid`, or the number itself when the id has no mapped name.
pub fn group_or_id(resolver: &dyn IdentityResolver, gid: u32) -> String {
    resolver
        .group_name(gid)
        .unwrap_or_else(|| numeric_fallback(gid))
}

fn numeric_fallback(id: u32) -> String {
    tracing::trace!("{}", ListError::IdentityResolutionFailure { id });
    id.to_string()
}

/// Resolver backed by the host user and group databases.
#[derive(Default)]
pub struct SystemIdentity {
    #[cfg(unix)]
    cache: users::UsersCache,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(unix)]
impl IdentityResolver for SystemIdentity {
    fn owner_name(&self, uid: u32) -> Option<String> {
        use users::Users;
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        use users::Groups;
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
impl IdentityResolver for SystemIdentity {
    fn owner_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyRoot;

    impl IdentityResolver for OnlyRoot {
        fn owner_name(&self, uid: u32) -> Option<String> {
            (uid == 0).then(|| "root".to_string())
        }

        fn group_name(&self, gid: u32) -> Option<String> {
            (gid == 0).then(|| "wheel".to_string())
        }
    }

    #[test]
    fn falls_back_to_numeric_id() {
        assert_eq!(owner_or_id(&OnlyRoot, 0), "root");
        assert_eq!(owner_or_id(&OnlyRoot, 4242), "4242");
        assert_eq!(group_or_id(&OnlyRoot, 0), "wheel");
        assert_eq!(group_or_id(&OnlyRoot, 77), "77");
    }

    #[cfg(unix)]
    #[test]
    fn system_resolver_knows_the_current_user() {
        let uid = users::get_current_uid();
        let resolved = owner_or_id(&SystemIdentity::new(), uid);
        assert!(!resolved.is_empty());
    }
}
