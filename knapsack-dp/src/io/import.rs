use log::debug;

use crate::entities::Instance;
use crate::error::KnapsackError;
use crate::io::ext_repr::ExtInstance;

/// Converts an [`ExtInstance`] into a validated [`Instance`].
pub fn import(ext_instance: &ExtInstance) -> Result<Instance, KnapsackError> {
    let instance = Instance::new(
        &ext_instance.values,
        &ext_instance.weights,
        ext_instance.capacity,
    )?;
    debug!(
        "[IMPORT] instance {:?}: {} items, capacity {}",
        ext_instance.name.as_deref().unwrap_or("-"),
        instance.n_items(),
        instance.capacity()
    );
    Ok(instance)
}
