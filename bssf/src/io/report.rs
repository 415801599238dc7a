use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::info;
use thousands::Separable;
use uld_rs::entities::{Instance, LoadingSolution};

/// Human-readable status summary of a [`LoadingSolution`]:
/// remaining weight, volume utilization, the first remaining spaces and the unplaced units per item.
pub struct SolutionReport<'a> {
    pub instance: &'a Instance,
    pub solution: &'a LoadingSolution,
    /// Maximum number of remaining spaces listed individually
    pub n_reported_spaces: usize,
}

impl<'a> SolutionReport<'a> {
    pub fn new(instance: &'a Instance, solution: &'a LoadingSolution, n_reported_spaces: usize) -> Self {
        Self {
            instance,
            solution,
            n_reported_spaces,
        }
    }

    /// Volume utilization as a percentage, 0 for a degenerate container
    pub fn volume_utilization(&self) -> f64 {
        self.solution.density(self.instance) * 100.0
    }

    pub fn log(&self) {
        for line in self.to_string().lines() {
            info!("[REPORT] {line}");
        }
    }
}

impl Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let solution = self.solution;
        writeln!(
            f,
            "remaining weight: {} kg",
            solution.remaining_weight.separate_with_commas()
        )?;
        writeln!(f, "volume utilization: {:.1}%", self.volume_utilization())?;

        let spaces = &solution.remaining_spaces;
        match spaces.is_empty() {
            true => writeln!(f, "remaining spaces: none")?,
            false => {
                writeln!(f, "remaining spaces:")?;
                for (i, space) in spaces.iter().take(self.n_reported_spaces).enumerate() {
                    writeln!(
                        f,
                        "  space {}: {:.0} x {:.0} x {:.0} cm",
                        i + 1,
                        space.length,
                        space.width,
                        space.height
                    )?;
                }
                if spaces.len() > self.n_reported_spaces {
                    writeln!(
                        f,
                        "  ... and {} more",
                        spaces.len() - self.n_reported_spaces
                    )?;
                }
            }
        }

        match solution.unplaced_items.is_empty() {
            true => write!(f, "unplaced units: none"),
            false => {
                write!(f, "unplaced units:")?;
                for (item_id, units) in solution.unplaced_by_item() {
                    let reasons = units.iter().map(|u| u.reason).unique().join(", ");
                    write!(f, "\n  {item_id}: {} ({reasons})", units.len())?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uld_rs::entities::{CargoItem, Container};
    use uld_rs::geometry::Orientation;
    use uld_rs::geometry::primitives::Dims;

    use crate::opt::bssf_optimizer::pack;

    #[test]
    fn lists_spaces_and_unplaced_units() {
        let container = Container::new(100.0, 100.0, 100.0, 50.0);
        let items = vec![
            CargoItem::new("crate", Dims::new(60.0, 40.0, 30.0), 10.0, 1, Orientation::Any),
            CargoItem::new("anvil", Dims::new(10.0, 10.0, 10.0), 45.0, 2, Orientation::Any),
            CargoItem::new("pole", Dims::new(200.0, 1.0, 1.0), 1.0, 1, Orientation::Any),
        ];
        let instance = Instance::new(container, items.clone());
        let solution = pack(container, items);

        let report = SolutionReport::new(&instance, &solution, 1).to_string();
        assert!(report.contains("remaining weight: 40 kg"));
        assert!(report.contains("space 1:"));
        assert!(!report.contains("space 2:"));
        assert!(report.contains("... and 2 more"));
        assert!(report.contains("anvil: 2 (overweight)"));
        assert!(report.contains("pole: 1 (no fit)"));
    }
}
