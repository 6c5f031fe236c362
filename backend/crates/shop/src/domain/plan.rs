//! Plan (catalog entry)

use serde::Serialize;

/// Resource allocation of a plan. `0` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    /// Memory in MB
    pub ram: u64,
    /// Disk in MB
    pub disk: u64,
    /// CPU share in percent
    pub cpu: u64,
}

impl ResourceSpec {
    pub const UNLIMITED: ResourceSpec = ResourceSpec {
        ram: 0,
        disk: 0,
        cpu: 0,
    };
}

/// A named tier of price and resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: String,
    /// Price in rupiah
    pub price: u64,
    pub specs: ResourceSpec,
}

impl Plan {
    pub fn new(id: impl Into<String>, price: u64, specs: ResourceSpec) -> Self {
        Self {
            id: id.into(),
            price,
            specs,
        }
    }

    pub fn display_name(&self) -> String {
        self.id.to_uppercase()
    }
}

/// Catalog the store starts with: `1gb`..`10gb`, then `unlimited`.
pub fn default_catalog() -> Vec<Plan> {
    let mut plans: Vec<Plan> = (1..=10u64)
        .map(|n| {
            Plan::new(
                format!("{n}gb"),
                n * 1000,
                ResourceSpec {
                    ram: n * 1000,
                    disk: n * 5000,
                    cpu: 20 + n * 20,
                },
            )
        })
        .collect();
    plans.push(Plan::new("unlimited", 12_000, ResourceSpec::UNLIMITED));
    plans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let plans = default_catalog();
        assert_eq!(plans.len(), 11);

        let first = &plans[0];
        assert_eq!(first.id, "1gb");
        assert_eq!(first.price, 1000);
        assert_eq!(
            first.specs,
            ResourceSpec {
                ram: 1000,
                disk: 5000,
                cpu: 40
            }
        );

        let tenth = &plans[9];
        assert_eq!(tenth.id, "10gb");
        assert_eq!(tenth.specs.cpu, 220);

        let last = plans.last().unwrap();
        assert_eq!(last.id, "unlimited");
        assert_eq!(last.price, 12_000);
        assert_eq!(last.specs, ResourceSpec::UNLIMITED);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Plan::new("3gb", 3000, ResourceSpec::UNLIMITED).display_name(), "3GB");
    }
}
