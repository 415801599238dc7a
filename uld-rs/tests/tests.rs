#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use std::time::Instant;

    use test_case::test_case;
    use uld_rs::entities::{
        CargoItem, Container, ContainerPreset, Instance, LoadingProblem, Placement, RejectionReason,
        UnitItem,
    };
    use uld_rs::geometry::Orientation;
    use uld_rs::geometry::geo_traits::Solid;
    use uld_rs::geometry::primitives::Dims;
    use uld_rs::io::export;
    use uld_rs::io::ext_repr::{ExtContainer, ExtInstance, ExtRejectionReason};
    use uld_rs::io::import::Importer;
    use uld_rs::util::assertions;

    fn read_ext_instance(path: &str) -> ExtInstance {
        let file = File::open(Path::new(path)).unwrap();
        serde_json::from_reader(BufReader::new(file)).unwrap()
    }

    #[test_case("../assets/sea_20ft_mixed.json", 6, 93; "sea_20ft_mixed")]
    #[test_case("../assets/ld3_parcels.json", 5, 86; "ld3_parcels")]
    #[test_case("../assets/weight_limited.json", 3, 37; "weight_limited")]
    #[test_case("../assets/oversized.json", 3, 11; "oversized")]
    fn import_asset(path: &str, n_items: usize, n_units: usize) {
        let ext_instance = read_ext_instance(path);
        let instance = Importer::new().import_instance(&ext_instance);
        assert_eq!(instance.items.len(), n_items);
        assert_eq!(instance.total_unit_qty(), n_units);
        assert_eq!(instance.units().count(), n_units);
        assert!(!instance.container.is_degenerate());
    }

    #[test_case(r#"{"preset": "20ft"}"#, ContainerPreset::Sea20ft; "20ft")]
    #[test_case(r#"{"preset": "40ft"}"#, ContainerPreset::Sea40ft; "40ft")]
    #[test_case(r#"{"preset": "40ft HC"}"#, ContainerPreset::Sea40ftHighCube; "40ft_hc")]
    #[test_case(r#"{"preset": "LD3"}"#, ContainerPreset::Ld3; "ld3")]
    #[test_case(r#"{"preset": "LD6"}"#, ContainerPreset::Ld6; "ld6")]
    #[test_case(r#"{"preset": "LD9"}"#, ContainerPreset::Ld9; "ld9")]
    fn preset_containers(json: &str, preset: ContainerPreset) {
        let ext_container: ExtContainer = serde_json::from_str(json).unwrap();
        assert_eq!(ext_container, ExtContainer::Preset { preset });
        let container = Importer::new().import_container(&ext_container);
        assert_eq!(container, preset.container());
        assert_eq!(preset.name().parse::<ContainerPreset>().unwrap(), preset);
    }

    #[test]
    fn preset_values() {
        assert_eq!(
            ContainerPreset::Sea40ft.container(),
            Container::new(1203.0, 235.0, 239.0, 28800.0)
        );
        assert_eq!(
            ContainerPreset::Ld9.container(),
            Container::new(318.0, 224.0, 163.0, 4626.0)
        );
        assert!(ContainerPreset::Ld6.is_air());
        assert!(!ContainerPreset::Sea20ft.is_air());
        assert!("ld3".parse::<ContainerPreset>().is_ok());
        assert!("30ft".parse::<ContainerPreset>().is_err());
    }

    #[test]
    fn container_without_dimensions_or_preset_is_rejected() {
        let result = serde_json::from_str::<ExtContainer>(r#"{"length": 10, "width": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn camel_case_max_weight() {
        let ext_container: ExtContainer =
            serde_json::from_str(r#"{"length": 1, "width": 2, "height": 3, "maxWeight": 4}"#).unwrap();
        let container = Importer::new().import_container(&ext_container);
        assert_eq!(container, Container::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn unit_ids_are_derived_from_item_id() {
        let item = CargoItem::new("box", Dims::new(1.0, 2.0, 3.0), 1.0, 3, Orientation::LengthHeight);
        let units = UnitItem::expand(&item).collect::<Vec<_>>();
        let ids = units.iter().map(|u| u.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["box-0", "box-1", "box-2"]);
        assert!(units.iter().all(|u| u.original_id == "box" && u.volume == 6.0));
        assert!(units.iter().all(|u| u.orientation == Orientation::LengthHeight));
    }

    #[test]
    fn manual_loading_and_export() {
        let container = Container::new(100.0, 80.0, 60.0, 100.0);
        let instance = Instance::new(
            container,
            vec![
                CargoItem::new("a", Dims::new(50.0, 80.0, 60.0), 30.0, 1, Orientation::Any),
                CargoItem::new("b", Dims::new(10.0, 10.0, 10.0), 80.0, 1, Orientation::Any),
            ],
        );
        let mut units = instance.units();
        let a = units.next().unwrap();
        let b = units.next().unwrap();

        let mut problem = LoadingProblem::new(instance.clone());
        problem.place(
            &a,
            Placement {
                space_index: 0,
                rotation: Dims::new(50.0, 80.0, 60.0),
            },
        );
        assert!(!problem.weight.admits(b.weight));
        problem.reject(b, RejectionReason::Overweight);

        let solution = problem.save();
        assert!(assertions::solution_is_feasible(&instance, &solution));
        assert_eq!(solution.remaining_weight, 70.0);
        assert_eq!(solution.remaining_volume(), 50.0 * 80.0 * 60.0);
        assert_eq!(solution.placed_volume(), container.volume() / 2.0);

        let epoch = Instant::now();
        let ext_solution = export::export_solution(&solution, &instance, epoch);
        assert_eq!(ext_solution.placed_items.len(), 1);
        assert_eq!(ext_solution.placed_items[0].unit_id, "a-0");
        assert_eq!(ext_solution.placed_items[0].original_item_id, "a");
        assert_eq!(ext_solution.unplaced_items.len(), 1);
        assert_eq!(ext_solution.unplaced_items[0].quantity, 1);
        assert_eq!(ext_solution.unplaced_items[0].reason, ExtRejectionReason::Overweight);
        assert_eq!(ext_solution.remaining_spaces.len(), 1);
        assert_eq!(ext_solution.remaining_spaces[0].x, 50.0);
        assert_eq!(ext_solution.density, 0.5);
        assert_eq!(ext_solution.weight_utilization, 0.3);

        let json = serde_json::to_value(&ext_solution).unwrap();
        for key in [
            "placed_items",
            "unplaced_items",
            "remaining_spaces",
            "remaining_weight",
            "density",
            "weight_utilization",
            "run_time_ms",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["unplaced_items"][0]["reason"], "overweight");
        assert_eq!(json["unplaced_items"][0]["orientation"], "any");
    }

    #[test]
    fn exported_instance_is_importable() {
        let ext_instance = read_ext_instance("../assets/ld3_parcels.json");
        let instance = Importer::new().import_instance(&ext_instance);
        let exported = export::export_instance(&instance, ext_instance.name.clone());
        let reimported = Importer::new().import_instance(&exported);

        assert_eq!(reimported.container, instance.container);
        assert_eq!(reimported.items, instance.items);
        assert_eq!(exported.name, "ld3_parcels");
    }

    #[test]
    fn overlapping_solution_is_infeasible() {
        let container = Container::new(100.0, 100.0, 100.0, 100.0);
        let instance = Instance::new(
            container,
            vec![CargoItem::new("a", Dims::new(60.0, 60.0, 60.0), 1.0, 2, Orientation::Any)],
        );
        let units = instance.units().collect::<Vec<_>>();
        let mut problem = LoadingProblem::new(instance.clone());
        problem.place(
            &units[0],
            Placement {
                space_index: 0,
                rotation: Dims::new(60.0, 60.0, 60.0),
            },
        );
        let mut solution = problem.save();

        // forge an overlapping copy of the first placement
        let mut forged = solution.placed_items[0].clone();
        forged.unit_id = "a-1".to_string();
        forged.cuboid.x = 30.0;
        solution.placed_items.push(forged);
        solution.remaining_weight -= 1.0;

        assert!(!assertions::placed_items_disjoint(&solution.placed_items));
        assert!(!assertions::solution_is_feasible(&instance, &solution));
        assert!(assertions::units_are_conserved(&instance, &solution));
        assert!(solution.placed_items.iter().all(|pi| pi.cuboid.volume() > 0.0));
    }
}
