use std::fmt::Display;

use crate::options::ItemGroup;

/// Anything with a current name that a host knows how to rename
pub trait NamedItem {
    fn name(&self) -> &str;

    /// Whether the underlying handle still resolves. Stale items are skipped in
    /// previews and reported as failures when applying.
    fn is_valid(&self) -> bool {
        true
    }
}

impl<T: NamedItem + ?Sized> NamedItem for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_valid(&self) -> bool {
        (**self).is_valid()
    }
}

/// Host-side collaborators for one group of items.
///
/// The engine never looks up registries itself. Everything it needs to know
/// about the outside world goes through this trait.
pub trait RenameHost {
    type Item: NamedItem;
    type Error: Display;

    fn group(&self) -> ItemGroup;

    /// Does another entity already occupy `candidate` in this item's scope?
    /// The item itself never counts, even when `candidate` is its own name.
    fn name_exists(&self, item: &Self::Item, candidate: &str) -> bool;

    /// Perform the rename. Each call is a complete unit of work.
    fn rename(&mut self, item: &Self::Item, new_name: &str) -> Result<(), Self::Error>;

    /// Called once after a batch with at least one successful rename
    fn refresh_index(&mut self) {}
}
