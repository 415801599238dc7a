use anyhow::{Result, ensure};
use itertools::Itertools;
use log::warn;
use rayon::prelude::*;

use crate::entities::{CargoItem, Container, Instance};
use crate::geometry::primitives::Dims;
use crate::io::ext_repr::{ExtCargoItem, ExtContainer, ExtInstance};

/// Converts external representations of containers and cargo items into internal ones.
///
/// The loading core assumes valid input. The importer is where invalid cargo items are filtered out.
#[derive(Clone, Debug, Copy, Default)]
pub struct Importer;

impl Importer {
    pub fn new() -> Importer {
        Importer
    }

    /// Degenerate containers are imported as-is, nothing can be loaded in them.
    pub fn import_container(&self, ext_cont: &ExtContainer) -> Container {
        let container = match ext_cont {
            #[cfg(feature = "presets")]
            ExtContainer::Preset { preset } => preset.container(),
            ExtContainer::Dimensions {
                length,
                width,
                height,
                max_weight,
            } => Container::new(*length, *width, *height, *max_weight),
        };
        if container.is_degenerate() {
            warn!(
                "[IMPORT] degenerate container {} (max weight: {}), nothing will be loaded",
                container.dims, container.max_weight
            );
        }
        container
    }

    /// Fails if the item has non-positive (or NaN) dimensions or weight, or a quantity below 1.
    pub fn import_item(&self, ext_item: &ExtCargoItem) -> Result<CargoItem> {
        let dims = Dims::new(ext_item.length, ext_item.width, ext_item.height);
        ensure!(
            dims.is_positive(),
            "item {:?} has non-positive dimensions: {}",
            ext_item.id,
            dims
        );
        ensure!(
            ext_item.weight > 0.0,
            "item {:?} has non-positive weight: {}",
            ext_item.id,
            ext_item.weight
        );
        ensure!(
            ext_item.quantity >= 1,
            "item {:?} has quantity {}, at least 1 required",
            ext_item.id,
            ext_item.quantity
        );
        let quantity = usize::try_from(ext_item.quantity)?;

        Ok(CargoItem::new(
            ext_item.id.clone(),
            dims,
            ext_item.weight,
            quantity,
            ext_item.orientation,
        ))
    }

    /// Imports the container and every valid cargo item, in their original order.
    /// Invalid items are skipped with a warning.
    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Instance {
        let container = self.import_container(&ext_instance.container);

        let items = ext_instance
            .items
            .par_iter()
            .map(|ext_item| self.import_item(ext_item))
            .collect::<Vec<Result<CargoItem>>>()
            .into_iter()
            .filter_map(|result| match result {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!("[IMPORT] ignoring item: {e}");
                    None
                }
            })
            .collect_vec();

        for id in items.iter().map(|item| item.id.as_str()).duplicates() {
            warn!("[IMPORT] duplicate item id {id:?}, unit ids may not be unique");
        }

        Instance::new(container, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;

    fn ext_item(id: &str, dims: [f64; 3], weight: f64, quantity: i64) -> ExtCargoItem {
        ExtCargoItem {
            id: id.to_string(),
            length: dims[0],
            width: dims[1],
            height: dims[2],
            weight,
            quantity,
            orientation: Orientation::Any,
        }
    }

    #[test]
    fn invalid_items_are_dropped() {
        let ext_instance = ExtInstance {
            name: "filtering".to_string(),
            container: ExtContainer::Dimensions {
                length: 100.0,
                width: 100.0,
                height: 100.0,
                max_weight: 1000.0,
            },
            items: vec![
                ext_item("ok", [10.0, 10.0, 10.0], 1.0, 2),
                ext_item("flat", [10.0, 0.0, 10.0], 1.0, 1),
                ext_item("weightless", [10.0, 10.0, 10.0], 0.0, 1),
                ext_item("none", [10.0, 10.0, 10.0], 1.0, 0),
                ext_item("negative", [10.0, 10.0, 10.0], 1.0, -3),
                ext_item("nan", [f64::NAN, 10.0, 10.0], 1.0, 1),
                ext_item("also_ok", [5.0, 5.0, 5.0], 1.0, 1),
            ],
        };
        let instance = Importer::new().import_instance(&ext_instance);
        let ids = instance.items.iter().map(|i| i.id.as_str()).collect_vec();
        assert_eq!(ids, vec!["ok", "also_ok"]);
        assert_eq!(instance.total_unit_qty(), 3);
    }

    #[test]
    fn degenerate_container_is_kept() {
        let container = Importer::new().import_container(&ExtContainer::Dimensions {
            length: 100.0,
            width: 100.0,
            height: 100.0,
            max_weight: -5.0,
        });
        assert!(container.is_degenerate());
        assert_eq!(container.max_weight, -5.0);
    }

    #[cfg(feature = "presets")]
    #[test]
    fn preset_container() {
        use crate::entities::ContainerPreset;

        let container = Importer::new().import_container(&ExtContainer::Preset {
            preset: ContainerPreset::Sea40ftHighCube,
        });
        assert_eq!(container, Container::new(1203.0, 235.0, 269.0, 28600.0));
    }
}
