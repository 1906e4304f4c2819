mod assets;
mod scene;

pub use assets::{AssetFolder, FileAsset};
pub use scene::{Scene, SceneActor};

use indicatif::{ProgressBar, ProgressStyle};
use renamer_core::{ItemGroup, RenameHost};

/// Wraps a host and ticks a progress bar on every rename attempt
pub struct WithProgress<'a, H> {
    inner: &'a mut H,
    bar: ProgressBar,
}

impl<'a, H: RenameHost> WithProgress<'a, H> {
    pub fn new(inner: &'a mut H, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message(format!("renaming {}s", inner.group()));
        Self { inner, bar }
    }

    pub fn hidden(inner: &'a mut H) -> Self {
        Self {
            inner,
            bar: ProgressBar::hidden(),
        }
    }
}

impl<H> Drop for WithProgress<'_, H> {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl<H: RenameHost> RenameHost for WithProgress<'_, H> {
    type Item = H::Item;
    type Error = H::Error;

    fn group(&self) -> ItemGroup {
        self.inner.group()
    }

    fn name_exists(&self, item: &Self::Item, candidate: &str) -> bool {
        self.inner.name_exists(item, candidate)
    }

    fn rename(&mut self, item: &Self::Item, new_name: &str) -> Result<(), Self::Error> {
        let result = self.inner.rename(item, new_name);
        self.bar.inc(1);
        result
    }

    fn refresh_index(&mut self) {
        self.inner.refresh_index();
    }
}
