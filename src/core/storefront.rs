use crate::domain::grocery::{CartItem, GroceryItem, Product, Profile, ProfileEntry, Promotion};
use crate::utils::error::Result;
use std::fmt::Write;

pub const CATEGORIES: [&str; 8] = [
    "Promotions", "Fruits", "Vegetables", "Bakery", "Beverages", "Dairy", "Meat", "Snacks",
];

pub fn promotions() -> Vec<Promotion> {
    vec![
        Promotion { title: "Special\nOffer".to_string(), color: 0xFF9C27B0, emoji: String::new() },
        Promotion { title: "50%".to_string(), color: 0xFFFF5722, emoji: "🍊".to_string() },
        Promotion { title: "Sale".to_string(), color: 0xFF4CAF50, emoji: String::new() },
    ]
}

fn item(name: &str, image_tag: &str, price: f64, description: &str) -> GroceryItem {
    GroceryItem {
        name: name.to_string(),
        image_tag: image_tag.to_string(),
        price,
        description: description.to_string(),
    }
}

pub fn fruits() -> Vec<GroceryItem> {
    vec![
        item("Apple", "🍎", 0.99, "Apples are a popular fruit, rich in fiber and vitamin C. They come in a variety of colors, including red, green, and yellow."),
        item("Banana", "🍌", 5.59, "Sweet yellow bananas. Great source of potassium and natural energy. Perfect for smoothies and healthy snacks."),
        item("Strawberry", "🍓", 1.99, "Juicy, sweet strawberries. Packed with antioxidants and vitamin C. Great for desserts and fresh eating."),
        item("Orange", "🍊", 0.79, "Fresh citrus oranges. Bursting with vitamin C and natural sweetness. Perfect for fresh juice and snacking."),
    ]
}

pub fn vegetables() -> Vec<GroceryItem> {
    vec![
        item("Broccoli", "🥦", 1.49, "Fresh green broccoli. Rich in vitamins K and C. Great for steaming, roasting, or stir-frying."),
        item("Carrot", "🥕", 0.89, "Crisp orange carrots. High in beta-carotene and fiber. Perfect for snacking or cooking."),
    ]
}

/// Card view of a catalog item, as shown in the product rows.
pub fn product_card(item: &GroceryItem) -> Product {
    Product {
        name: item.name.clone(),
        price_label: format!("${:.2}", item.price),
        emoji: item.image_tag.clone(),
    }
}

pub fn cart_items() -> Vec<CartItem> {
    [("Bananas", 0.99), ("Apples", 4.49), ("Carrots", 1.79), ("Milk", 3.19)]
        .into_iter()
        .map(|(name, price)| CartItem { name: name.to_string(), price })
        .collect()
}

pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

pub fn profile() -> Profile {
    let entry = |icon: &str, title: &str, value: &str| ProfileEntry {
        icon: icon.to_string(),
        title: title.to_string(),
        value: value.to_string(),
    };

    Profile {
        initials: "JD".to_string(),
        name: "John Doe".to_string(),
        email: "ammar@gmail.com".to_string(),
        entries: vec![
            entry("📍", "Address", "213 State St, Harrisburg, PA"),
            entry("📞", "Phone", "+1 (641) -233-9894"),
            entry("🎯", "Loyalty Points", "1,250 points"),
            entry("📦", "Orders", "24 total orders"),
            entry("⭐", "Member Since", "January 2022"),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Cart,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Cart, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Cart => "Cart",
            Tab::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreScreen {
    Browse,
    /// Detail view holding the encoded item handed over from the browse list.
    Detail(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryStore {
    tab: Tab,
    screen: StoreScreen,
}

impl Default for GroceryStore {
    fn default() -> Self {
        Self {
            tab: Tab::Home,
            screen: StoreScreen::Browse,
        }
    }
}

impl GroceryStore {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn screen(&self) -> &StoreScreen {
        &self.screen
    }

    /// Selects a bottom-bar tab by position; out-of-range positions are ignored.
    pub fn select_tab(&mut self, index: usize) -> Tab {
        if let Some(tab) = Tab::ALL.get(index) {
            self.tab = *tab;
        }
        self.tab
    }

    /// Opens the detail view for a catalog item, matched case-insensitively.
    pub fn open_product(&mut self, name: &str) -> Option<GroceryItem> {
        let found = fruits()
            .into_iter()
            .chain(vegetables())
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))?;

        self.tab = Tab::Home;
        self.screen = StoreScreen::Detail(found.to_bytes());
        Some(found)
    }

    pub fn back(&mut self) {
        self.screen = StoreScreen::Browse;
    }

    pub fn selected_product(&self) -> Result<Option<GroceryItem>> {
        match &self.screen {
            StoreScreen::Browse => Ok(None),
            StoreScreen::Detail(bytes) => GroceryItem::from_bytes(bytes).map(Some),
        }
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();

        match self.tab {
            Tab::Home => match self.selected_product()? {
                Some(item) => render_detail(&mut out, &item),
                None => render_home(&mut out),
            },
            Tab::Cart => render_cart(&mut out),
            Tab::Profile => render_profile(&mut out),
        }

        let bar: Vec<String> = Tab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.tab {
                    format!("[{}]", tab.title())
                } else {
                    tab.title().to_string()
                }
            })
            .collect();
        let _ = write!(out, "\n{}", bar.join("  "));
        Ok(out)
    }
}

fn render_home(out: &mut String) {
    for category in CATEGORIES {
        let _ = writeln!(out, "{}", category);
        match category {
            "Promotions" => {
                for promo in promotions() {
                    let _ = writeln!(out, "  {} {}", promo.title.replace('\n', " "), promo.emoji);
                }
            }
            "Fruits" | "Vegetables" => {
                let items = if category == "Fruits" { fruits() } else { vegetables() };
                for product in items.iter().map(product_card) {
                    let _ = writeln!(out, "  {} {} {}", product.emoji, product.name, product.price_label);
                }
            }
            _ => {
                let _ = writeln!(out, "  Coming soon");
            }
        }
    }
}

fn render_detail(out: &mut String, item: &GroceryItem) {
    let _ = writeln!(out, "Detail Screen");
    let _ = writeln!(out, "{} {}", item.image_tag, item.name);
    let _ = writeln!(out, "Price: ${:.2}", item.price);
    let _ = writeln!(out, "{}", item.description);
}

fn render_cart(out: &mut String) {
    let items = cart_items();
    let _ = writeln!(out, "Cart");
    for item in &items {
        let _ = writeln!(out, "  {:<10} ${:.2}", item.name, item.price);
    }
    let _ = writeln!(out, "Total: ${:.2}", cart_total(&items));
}

fn render_profile(out: &mut String) {
    let profile = profile();
    let _ = writeln!(out, "({}) {}", profile.initials, profile.name);
    let _ = writeln!(out, "{}", profile.email);
    for entry in &profile.entries {
        let _ = writeln!(out, "  {} {}: {}", entry.icon, entry.title, entry.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_total() {
        let total = cart_total(&cart_items());
        assert!((total - 10.46).abs() < 1e-9);

        let mut store = GroceryStore::default();
        store.select_tab(1);
        assert!(store.render().unwrap().contains("Total: $10.46"));
    }

    #[test]
    fn test_select_tab_ignores_out_of_range() {
        let mut store = GroceryStore::default();
        assert_eq!(store.select_tab(2), Tab::Profile);
        assert_eq!(store.select_tab(9), Tab::Profile);
        assert_eq!(store.select_tab(1), Tab::Cart);
    }

    #[test]
    fn test_open_product_and_back() {
        let mut store = GroceryStore::default();
        let opened = store.open_product("banana").unwrap();
        assert_eq!(opened.price, 5.59);

        assert_eq!(store.selected_product().unwrap(), Some(opened));
        let text = store.render().unwrap();
        assert!(text.starts_with("Detail Screen\n🍌 Banana\nPrice: $5.59\nSweet yellow bananas."));

        store.back();
        assert_eq!(store.selected_product().unwrap(), None);
        assert!(store.render().unwrap().starts_with("Promotions"));
    }

    #[test]
    fn test_unknown_product_keeps_screen() {
        let mut store = GroceryStore::default();
        assert!(store.open_product("Durian").is_none());
        assert_eq!(store.screen(), &StoreScreen::Browse);
    }

    #[test]
    fn test_product_card_price_label() {
        let card = product_card(&fruits()[3]);
        assert_eq!(card.price_label, "$0.79");
        assert_eq!(card.emoji, "🍊");
    }

    #[test]
    fn test_profile_render() {
        let mut store = GroceryStore::default();
        store.select_tab(2);
        let text = store.render().unwrap();
        assert!(text.contains("(JD) John Doe"));
        assert!(text.contains("Loyalty Points: 1,250 points"));
        assert!(text.ends_with("Home  Cart  [Profile]"));
    }
}
