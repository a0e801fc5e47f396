//! 配置 -> 夹具数据

use config::{AppConfig, WarehouseSettings};
use errors::AppResult;

use crate::domain::{Product, WarehouseFixture, WarehouseSite};

/// 根据配置构建夹具数据，未配置 `[warehouse]` 时使用内置参考数据
pub fn fixture_from_config(config: &AppConfig) -> AppResult<WarehouseFixture> {
    match &config.warehouse {
        Some(settings) => fixture_from_settings(settings),
        None => Ok(WarehouseFixture::reference()),
    }
}

pub fn fixture_from_settings(settings: &WarehouseSettings) -> AppResult<WarehouseFixture> {
    let site = WarehouseSite {
        name: settings.name.clone(),
        address: settings.address.clone(),
        postal_code: settings.postal_code,
        city: settings.city.clone(),
        country: settings.country.clone(),
    };

    let products = settings
        .products
        .iter()
        .map(|p| Product::new(&p.id, &p.name, &p.category, p.quantity, &p.unit))
        .collect();

    WarehouseFixture::new(site, products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{ProductSettings, ServerConfig, TelemetryConfig};
    use errors::AppError;

    fn config(warehouse: Option<WarehouseSettings>) -> AppConfig {
        AppConfig {
            app_name: "warehouse-service".to_string(),
            app_env: "development".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 50051,
            },
            telemetry: TelemetryConfig::default(),
            warehouse,
        }
    }

    fn settings(products: Vec<ProductSettings>) -> WarehouseSettings {
        WarehouseSettings {
            name: "Salzburg Nord".to_string(),
            address: "Bahnhofstraße 3".to_string(),
            postal_code: 5020,
            city: "Salzburg".to_string(),
            country: "AUSTRIA".to_string(),
            products,
        }
    }

    #[test]
    fn test_missing_section_uses_reference() {
        let fixture = fixture_from_config(&config(None)).unwrap();
        assert_eq!(fixture, WarehouseFixture::reference());
    }

    #[test]
    fn test_section_replaces_reference() {
        let product = ProductSettings {
            id: "p-1".to_string(),
            name: "Mehl".to_string(),
            category: "Backzutaten".to_string(),
            quantity: 30,
            unit: "1KG/Packung".to_string(),
        };
        let fixture = fixture_from_config(&config(Some(settings(vec![product])))).unwrap();

        assert_eq!(fixture.site().city, "Salzburg");
        assert_eq!(fixture.products()[0].name, "Mehl");
    }

    #[test]
    fn test_section_without_products_is_rejected() {
        let err = fixture_from_config(&config(Some(settings(vec![])))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
