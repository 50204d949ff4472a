//! Plugin trait

use super::registry::Registry;
use bootreg_domain::error::Result;

/// A deferred startup step that populates one registry slot
///
/// `apply` consumes the plugin: each plugin value is applied at most once.
/// A plugin touches only the slot it owns and stores a handle only once it
/// is fully initialized.
pub trait Plugin {
    /// Name used in log records
    fn name(&self) -> &str;

    /// Initialize the resource and store it in `registry`
    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()>;
}

/// Plugin backed by a closure
pub struct FnPlugin<F> {
    name: String,
    f: F,
}

impl<F> Plugin for FnPlugin<F>
where
    F: FnOnce(&mut Registry) -> Result<()>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()> {
        let this = *self;
        (this.f)(registry)
    }
}

/// Box a closure as a named plugin
///
/// ```ignore
/// let seed = plugin_fn("seed", |registry: &mut Registry| {
///     registry.set_config(reader);
///     Ok(())
/// });
/// ```
pub fn plugin_fn<'a, F>(name: impl Into<String>, f: F) -> Box<dyn Plugin + 'a>
where
    F: FnOnce(&mut Registry) -> Result<()> + 'a,
{
    Box::new(FnPlugin {
        name: name.into(),
        f,
    })
}
