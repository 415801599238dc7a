use crate::entities::{CargoItem, Container, UnitItem};

/// Static representation of a loading request: a container and the cargo to load into it.
#[derive(Debug, Clone)]
pub struct Instance {
    pub container: Container,
    /// Cargo item types, in their original enumeration order
    pub items: Vec<CargoItem>,
}

impl Instance {
    pub fn new(container: Container, items: Vec<CargoItem>) -> Self {
        Self { container, items }
    }

    /// Expands every item into its units, preserving the enumeration order of the items.
    pub fn units(&self) -> impl Iterator<Item = UnitItem> + '_ {
        self.items.iter().flat_map(UnitItem::expand)
    }

    pub fn total_unit_qty(&self) -> usize {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Volume of the container, 0 if it is degenerate
    pub fn container_volume(&self) -> f64 {
        self.container.volume()
    }

    pub fn item(&self, id: &str) -> Option<&CargoItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
