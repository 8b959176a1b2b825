//! Quantity trait and related types.
//!
//! A [`Quantity`] is per-element data attached to a structure, such as the
//! field magnitude that drives marker color or the marker sizes.

/// Data associated with a structure, one value per element.
pub trait Quantity: Send + Sync {
    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the name of the parent structure.
    fn structure_name(&self) -> &str;

    /// Returns the number of data elements.
    fn data_size(&self) -> usize;
}
