use crate::core::{Facade, Material, OrderLine, OrderSummary, CURRENCY_SUFFIX};

pub const ORDER_HEADER: &str = "Order includes:";

/// Facades in the order they were added. The order owns every facade.
#[derive(Debug, Clone, Default)]
pub struct Order {
    facades: Vec<Facade>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_facade(&mut self, facade: Facade) {
        tracing::debug!("Adding to order: {}", facade);
        self.facades.push(facade);
    }

    pub fn facades(&self) -> &[Facade] {
        &self.facades
    }

    pub fn len(&self) -> usize {
        self.facades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facades.is_empty()
    }

    /// Header line followed by one line per facade.
    pub fn display_order(&self) -> String {
        let mut lines = vec![ORDER_HEADER.to_string()];
        lines.extend(self.facades.iter().map(Facade::display));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn calculate_total_cost(&self) -> f64 {
        // fold from +0.0 so an empty order prints "0", not "-0"
        self.facades
            .iter()
            .map(Facade::calculate_cost)
            .fold(0.0, |total, cost| total + cost)
    }

    pub fn summary(&self, material: Material) -> OrderSummary {
        OrderSummary {
            material,
            items: self.facades.iter().map(OrderLine::from).collect(),
            total: self.calculate_total_cost(),
            currency: CURRENCY_SUFFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FacadeKind, MaterialFactory};
    use crate::core::factory::{FilmFactory, PlasticFactory};

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.calculate_total_cost(), 0.0);
        assert_eq!(order.display_order(), "Order includes:\n");
    }

    #[test]
    fn test_display_keeps_insertion_order() {
        let factory = FilmFactory;
        let mut order = Order::new();
        order.add_facade(factory.create_glass_facade(1.0, 1.0));
        order.add_facade(factory.create_solid_facade(2.0, 3.0));
        order.add_facade(factory.create_glass_facade(0.5, 2.0));

        assert_eq!(
            order.display_order(),
            "Order includes:\nGlass Facade: 1x1 m\nSolid Facade: 2x3 m\nGlass Facade: 0.5x2 m\n"
        );
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_total_is_sum_of_costs_in_any_order() {
        let factory = PlasticFactory;
        let facades = vec![
            factory.create_solid_facade(2.0, 3.0),
            factory.create_glass_facade(1.0, 1.0),
            factory.create_solid_facade(0.5, 0.5),
        ];
        let expected: f64 = facades.iter().map(Facade::calculate_cost).sum();

        let mut forward = Order::new();
        facades.iter().cloned().for_each(|f| forward.add_facade(f));

        let mut backward = Order::new();
        facades.iter().rev().cloned().for_each(|f| backward.add_facade(f));

        assert_eq!(forward.calculate_total_cost(), expected);
        assert_eq!(backward.calculate_total_cost(), expected);
        assert_eq!(expected, 2400.0 + 450.0 + 100.0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let factory = FilmFactory;
        let mut order = Order::new();
        order.add_facade(factory.create_solid_facade(1.0, 1.0));
        order.add_facade(factory.create_solid_facade(1.0, 1.0));
        assert_eq!(order.len(), 2);
        assert_eq!(order.calculate_total_cost(), 400.0);
    }

    #[test]
    fn test_summary() {
        let factory = FilmFactory;
        let mut order = Order::new();
        order.add_facade(factory.create_solid_facade(2.0, 3.0));
        order.add_facade(factory.create_glass_facade(1.0, 1.0));

        let summary = order.summary(Material::Film);
        assert_eq!(summary.material, Material::Film);
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].kind, FacadeKind::Solid);
        assert_eq!(summary.items[0].cost, 1200.0);
        assert_eq!(summary.items[1].cost, 250.0);
        assert_eq!(summary.total, 1450.0);
        assert_eq!(summary.currency, "UAH");
    }
}
