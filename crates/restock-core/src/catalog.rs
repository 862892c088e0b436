//! 商品目錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Item;

/// 目錄條目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// 品項ID
    pub id: String,

    /// 顯示名稱
    pub name: String,

    /// 預設每包數量（使用者可修改）
    pub default_units_per_pack: Decimal,

    /// 圖片
    pub image_url: String,
}

impl CatalogEntry {
    pub fn new(id: &str, name: &str, default_units_per_pack: u32, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            default_units_per_pack: Decimal::from(default_units_per_pack),
            image_url: image_url.to_string(),
        }
    }

    /// 轉為未啟用的品項
    pub fn to_item(&self) -> Item {
        Item::new(self.id.clone(), self.name.clone(), self.default_units_per_pack)
            .with_image_url(self.image_url.clone())
    }
}

/// 靜態商品目錄
///
/// 條目順序即顯示順序，也是可用天數相同時的排序依據。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// 레디홈 預設照護用品
    pub fn readyhome() -> Self {
        Self::new(vec![
            CatalogEntry::new(
                "diaper-outer",
                "겉기저귀",
                10,
                "https://images.unsplash.com/photo-1544126592-807daa2b565b?auto=format&fit=crop&q=80&w=200",
            ),
            CatalogEntry::new(
                "diaper-inner",
                "속기저귀",
                30,
                "https://images.unsplash.com/photo-1626012497673-206e90367319?auto=format&fit=crop&q=80&w=200",
            ),
            CatalogEntry::new(
                "diaper-pant",
                "팬티형 기저귀",
                10,
                "https://images.unsplash.com/photo-1544126592-72021077759c?auto=format&fit=crop&q=80&w=200",
            ),
            CatalogEntry::new(
                "mat",
                "깔개매트",
                10,
                "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&q=80&w=200",
            ),
            CatalogEntry::new(
                "wipes",
                "물티슈",
                72,
                "https://images.unsplash.com/photo-1563453392212-326f5e854473?auto=format&fit=crop&q=80&w=200",
            ),
            CatalogEntry::new(
                "gloves",
                "위생장갑",
                200,
                "https://images.unsplash.com/photo-1584622781564-1d9876a13d00?auto=format&fit=crop&q=80&w=200",
            ),
        ])
    }

    /// 依ID查找條目
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// 建立整組品項（保持目錄順序）
    pub fn to_items(&self) -> Vec<Item> {
        self.entries.iter().map(CatalogEntry::to_item).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
