//! Common test utilities for rebundle integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test shop with a catalog directory and a basket file
#[allow(dead_code)]
pub struct TestShop {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to shop root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestShop {
    /// Create a new test shop with an empty catalog directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("catalog")).expect("Failed to create catalog directory");
        Self { temp, path }
    }

    /// A rebundle command running in the shop root
    ///
    /// Developer REBUNDLE_* overrides are always cleared so commands
    /// resolve ./catalog and ./basket.yaml under the shop root.
    pub fn cmd(&self) -> Command {
        let mut cmd = rebundle_cmd();
        cmd.current_dir(&self.path);
        cmd
    }

    /// Write a bundle file into the catalog
    pub fn write_bundle(&self, file_name: &str, content: &str) {
        let file_path = self.path.join("catalog").join(file_name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write bundle file");
    }

    /// Write the basket file
    pub fn write_basket(&self, content: &str) {
        std::fs::write(self.path.join("basket.yaml"), content).expect("Failed to write basket");
    }

    /// Read the basket file back
    pub fn read_basket(&self) -> String {
        std::fs::read_to_string(self.path.join("basket.yaml")).expect("Failed to read basket")
    }

    /// Whether the basket file exists
    pub fn basket_exists(&self) -> bool {
        self.path.join("basket.yaml").exists()
    }

    /// Seed the catalog with the standard test bundle
    ///
    /// Bundle 3 "Summer Pair" needs 2 x product 101 and 1 x product 205
    /// and costs 25.00 GBP.
    pub fn seed_summer_pair(&self) {
        self.write_bundle(
            "summer-pair.yaml",
            r#"id: 3
name: Summer Pair
prices:
  GBP: 2500
products:
  - product_id: 101
    quantity: 2
  - product_id: 205
"#,
        );
    }

    /// Seed a basket whose lines qualify for the standard test bundle
    ///
    /// Lines total 28.00 GBP against the bundle's 25.00 GBP price, so
    /// the bundle saves 3.00 GBP.
    pub fn seed_qualifying_basket(&self) {
        self.write_basket(
            r#"currency: GBP
lines:
  - product_id: 101
    quantity: 2
    unit_price: 1000
  - product_id: 205
    quantity: 1
    unit_price: 800
metadata:
  bundle_0: 3
"#,
        );
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// A rebundle command with test env hygiene applied
#[allow(deprecated)]
pub fn rebundle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rebundle").expect("rebundle binary builds");
    // Always ignore any developer REBUNDLE_* overrides during tests
    cmd.env_remove("REBUNDLE_CATALOG");
    cmd.env_remove("REBUNDLE_BASKET");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_creation() {
        let shop = TestShop::new();
        assert!(shop.path.join("catalog").exists());
        assert!(!shop.basket_exists());
    }

    #[test]
    fn test_shop_file_operations() {
        let shop = TestShop::new();
        shop.write_bundle("pair.yaml", "id: 1\nname: Pair\n");
        shop.write_basket("currency: GBP\n");

        assert!(shop.path.join("catalog/pair.yaml").exists());
        assert_eq!(shop.read_basket(), "currency: GBP\n");
    }
}
