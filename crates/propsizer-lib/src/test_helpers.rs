// Test-only helpers for `propsizer-lib` tests
#![allow(dead_code)]
use crate::catalog::{EngineRecord, GearboxRecord};

/// Builder to create `EngineRecord` instances in tests with sensible defaults.
pub struct EngineBuilder {
    engine: EngineRecord,
}

impl EngineBuilder {
    #[must_use]
    pub fn new(model: &str) -> Self {
        Self {
            engine: EngineRecord {
                model: model.to_string(),
                manufacturer: "Test".to_string(),
                power_kw: 400.0,
                rated_rpm: 3000.0,
                dry_weight_kg: 800.0,
                fuel: "diesel".to_string(),
                length_mm: 1200.0,
                width_mm: 700.0,
                height_mm: 900.0,
                price_usd: 60_000.0,
            },
        }
    }

    pub fn manufacturer(mut self, manufacturer: &str) -> Self {
        self.engine.manufacturer = manufacturer.to_string();
        self
    }

    pub fn power_kw(mut self, kw: f64) -> Self {
        self.engine.power_kw = kw;
        self
    }

    pub fn rated_rpm(mut self, rpm: f64) -> Self {
        self.engine.rated_rpm = rpm;
        self
    }

    pub fn weight_kg(mut self, kg: f64) -> Self {
        self.engine.dry_weight_kg = kg;
        self
    }

    pub fn length_mm(mut self, mm: f64) -> Self {
        self.engine.length_mm = mm;
        self
    }

    pub fn fuel(mut self, fuel: &str) -> Self {
        self.engine.fuel = fuel.to_string();
        self
    }

    pub fn price(mut self, usd: f64) -> Self {
        self.engine.price_usd = usd;
        self
    }

    pub fn build(self) -> EngineRecord {
        self.engine
    }
}

/// Builder to create `GearboxRecord` instances in tests with sensible defaults.
pub struct GearboxBuilder {
    gearbox: GearboxRecord,
}

impl GearboxBuilder {
    #[must_use]
    pub fn new(model: &str) -> Self {
        Self {
            gearbox: GearboxRecord {
                model: model.to_string(),
                ratios: vec![1.5, 2.0, 2.5, 3.0],
                max_input_kw: 1000.0,
                max_input_rpm: 3500.0,
                price_usd: 20_000.0,
            },
        }
    }

    pub fn ratios(mut self, ratios: &[f64]) -> Self {
        self.gearbox.ratios = ratios.to_vec();
        self
    }

    pub fn max_input(mut self, kw: f64, rpm: f64) -> Self {
        self.gearbox.max_input_kw = kw;
        self.gearbox.max_input_rpm = rpm;
        self
    }

    pub fn price(mut self, usd: f64) -> Self {
        self.gearbox.price_usd = usd;
        self
    }

    pub fn build(self) -> GearboxRecord {
        self.gearbox
    }
}
