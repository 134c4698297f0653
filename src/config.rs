//! Static lexicons and size presets for the generated dataset.

/// Default number of rows accumulated before a sink flush.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// A product category with its brand pool and product name templates.
pub struct Category {
    pub name: &'static str,
    pub brands: &'static [&'static str],
    pub products: &'static [ProductTemplate],
}

/// A product name template with its retail price range. `{v}` in the
/// name is replaced with a version number.
pub struct ProductTemplate {
    pub name: &'static str,
    pub min_price: f64,
    pub max_price: f64,
}

const fn product(name: &'static str, min_price: f64, max_price: f64) -> ProductTemplate {
    ProductTemplate {
        name,
        min_price,
        max_price,
    }
}

/// Real-world brand and product data organized by category.
pub const CATALOG: &[Category] = &[
    Category {
        name: "Electronics",
        brands: &[
            "Apple", "Samsung", "Sony", "LG", "Dell", "HP", "Lenovo", "Asus", "Bose", "JBL",
            "Google", "Microsoft",
        ],
        products: &[
            product("iPhone {v} Pro", 799.0, 1299.0),
            product("Galaxy S{v}", 699.0, 1199.0),
            product("MacBook Pro {v}\"", 1299.0, 2499.0),
            product("Surface Pro {v}", 899.0, 1599.0),
            product("Pixel {v}", 599.0, 999.0),
            product("AirPods Pro", 199.0, 279.0),
            product("WH-1000XM{v} Headphones", 279.0, 399.0),
            product("4K Smart TV {v}\"", 399.0, 1999.0),
            product("Gaming Monitor {v}\"", 249.0, 899.0),
            product("Mechanical Keyboard", 79.0, 199.0),
            product("External SSD {v}TB", 89.0, 299.0),
            product("Smart Watch Series {v}", 249.0, 599.0),
        ],
    },
    Category {
        name: "Clothing",
        brands: &[
            "Nike",
            "Adidas",
            "Levi's",
            "Zara",
            "H&M",
            "Uniqlo",
            "Gap",
            "Ralph Lauren",
            "Under Armour",
            "Puma",
            "The North Face",
            "Patagonia",
        ],
        products: &[
            product("Classic T-Shirt", 19.0, 89.0),
            product("Slim Fit Jeans", 49.0, 149.0),
            product("Hoodie", 39.0, 129.0),
            product("Running Shoes", 79.0, 189.0),
            product("Dress Shirt", 45.0, 145.0),
            product("Winter Jacket", 129.0, 499.0),
            product("Yoga Pants", 39.0, 99.0),
            product("Denim Jacket", 79.0, 199.0),
            product("Wool Sweater", 59.0, 199.0),
            product("Baseball Cap", 19.0, 49.0),
            product("Backpack", 49.0, 199.0),
            product("Rain Jacket", 79.0, 249.0),
        ],
    },
    Category {
        name: "Home & Kitchen",
        brands: &[
            "Dyson",
            "KitchenAid",
            "Instant Pot",
            "Ninja",
            "Cuisinart",
            "Keurig",
            "Breville",
            "iRobot",
            "Vitamix",
            "Le Creuset",
            "OXO",
            "Nespresso",
        ],
        products: &[
            product("Vacuum Cleaner V{v}", 299.0, 699.0),
            product("Stand Mixer", 279.0, 449.0),
            product("Pressure Cooker", 79.0, 149.0),
            product("Coffee Maker", 49.0, 299.0),
            product("Robot Vacuum", 249.0, 799.0),
            product("Air Fryer", 79.0, 199.0),
            product("Espresso Machine", 199.0, 699.0),
            product("Dutch Oven", 79.0, 399.0),
            product("Cookware Set", 149.0, 599.0),
            product("Electric Kettle", 39.0, 129.0),
            product("Dish Set {v}-Piece", 49.0, 199.0),
            product("Air Purifier", 149.0, 549.0),
        ],
    },
    Category {
        name: "Beauty",
        brands: &[
            "L'Oréal",
            "Estée Lauder",
            "Clinique",
            "MAC",
            "Maybelline",
            "NYX",
            "Fenty Beauty",
            "NARS",
            "Olay",
            "Neutrogena",
            "CeraVe",
            "The Ordinary",
        ],
        products: &[
            product("Foundation", 19.0, 59.0),
            product("Mascara", 9.0, 29.0),
            product("Lipstick", 12.0, 39.0),
            product("Moisturizer", 15.0, 89.0),
            product("Serum", 19.0, 129.0),
            product("Eyeshadow Palette", 29.0, 69.0),
            product("Concealer", 12.0, 35.0),
            product("Face Mask Set", 15.0, 49.0),
            product("Eye Cream", 25.0, 89.0),
            product("Sunscreen SPF{v}", 12.0, 39.0),
            product("Perfume {v}ml", 49.0, 199.0),
            product("Hair Serum", 15.0, 59.0),
        ],
    },
    Category {
        name: "Sports & Outdoors",
        brands: &[
            "Nike",
            "Adidas",
            "Under Armour",
            "The North Face",
            "Columbia",
            "Patagonia",
            "Yeti",
            "Coleman",
            "Garmin",
            "Fitbit",
            "Hydro Flask",
            "Osprey",
        ],
        products: &[
            product("Running Shoes", 89.0, 199.0),
            product("Yoga Mat", 19.0, 89.0),
            product("Dumbbell Set", 49.0, 299.0),
            product("Hiking Boots", 99.0, 249.0),
            product("Tent {v}-Person", 99.0, 499.0),
            product("Sleeping Bag", 49.0, 249.0),
            product("Cooler {v}qt", 79.0, 399.0),
            product("Fitness Tracker", 79.0, 299.0),
            product("GPS Watch", 199.0, 599.0),
            product("Camping Chair", 29.0, 129.0),
            product("Backpack {v}L", 79.0, 299.0),
            product("Bike Helmet", 39.0, 149.0),
        ],
    },
    Category {
        name: "Books",
        brands: &[
            "Penguin Random House",
            "HarperCollins",
            "Simon & Schuster",
            "Hachette",
            "Macmillan",
            "Scholastic",
            "Wiley",
            "O'Reilly",
            "Pearson",
            "Oxford University Press",
            "Bloomsbury",
            "National Geographic",
        ],
        products: &[
            product("Bestselling Novel", 12.0, 29.0),
            product("Mystery Thriller", 10.0, 25.0),
            product("Science Fiction Epic", 12.0, 28.0),
            product("Biography", 15.0, 35.0),
            product("Cookbook", 19.0, 45.0),
            product("History Book", 18.0, 39.0),
            product("Children's Book", 8.0, 22.0),
            product("Business Book", 16.0, 35.0),
            product("Programming Guide", 29.0, 69.0),
            product("Travel Guide", 15.0, 35.0),
            product("Graphic Novel", 15.0, 35.0),
            product("Language Learning", 18.0, 49.0),
        ],
    },
    Category {
        name: "Toys & Games",
        brands: &[
            "LEGO",
            "Hasbro",
            "Mattel",
            "Nintendo",
            "PlayStation",
            "Xbox",
            "Fisher-Price",
            "Hot Wheels",
            "Nerf",
            "Funko",
            "Ravensburger",
            "Playmobil",
        ],
        products: &[
            product("Building Set", 19.0, 199.0),
            product("Board Game", 19.0, 59.0),
            product("Action Figure", 12.0, 49.0),
            product("Video Game", 39.0, 69.0),
            product("Gaming Console", 299.0, 549.0),
            product("Remote Control Car", 29.0, 149.0),
            product("Puzzle {v} Pieces", 12.0, 39.0),
            product("Educational Toy", 19.0, 69.0),
            product("Plush Toy", 12.0, 49.0),
            product("Science Kit", 19.0, 59.0),
            product("Train Set", 39.0, 199.0),
            product("Drone", 49.0, 299.0),
        ],
    },
    Category {
        name: "Grocery",
        brands: &[
            "Whole Foods",
            "Trader Joe's",
            "Organic Valley",
            "Annie's",
            "Kind",
            "Clif Bar",
            "Bob's Red Mill",
            "Amy's",
            "Stonyfield",
            "Horizon",
            "Kashi",
            "RXBar",
        ],
        products: &[
            product("Organic Coffee Beans", 12.0, 24.0),
            product("Granola Bars Pack", 5.0, 12.0),
            product("Olive Oil", 8.0, 29.0),
            product("Pasta Sauce", 4.0, 9.0),
            product("Protein Bars", 15.0, 35.0),
            product("Almond Butter", 8.0, 15.0),
            product("Organic Tea", 6.0, 14.0),
            product("Maple Syrup", 10.0, 25.0),
            product("Chia Seeds", 8.0, 16.0),
            product("Dark Chocolate", 4.0, 12.0),
            product("Oatmeal Pack", 5.0, 12.0),
            product("Sparkling Water Case", 12.0, 24.0),
        ],
    },
];

/// A warehouse location.
pub struct Warehouse {
    pub code: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub country: &'static str,
}

const fn warehouse(
    code: &'static str,
    city: &'static str,
    state: &'static str,
    country: &'static str,
) -> Warehouse {
    Warehouse {
        code,
        city,
        state,
        country,
    }
}

pub const WAREHOUSES: &[Warehouse] = &[
    warehouse("WH001", "Los Angeles", "CA", "USA"),
    warehouse("WH002", "Chicago", "IL", "USA"),
    warehouse("WH003", "New York", "NY", "USA"),
    warehouse("WH004", "Dallas", "TX", "USA"),
    warehouse("WH005", "Seattle", "WA", "USA"),
    warehouse("WH006", "Atlanta", "GA", "USA"),
    warehouse("WH007", "Phoenix", "AZ", "USA"),
    warehouse("WH008", "Denver", "CO", "USA"),
];

pub const SHIPPING_CARRIERS: &[&str] = &["FedEx", "UPS", "USPS", "DHL", "Amazon Logistics", "OnTrac"];

pub const COUPON_PREFIXES: &[&str] = &[
    "SAVE", "DEAL", "SALE", "PROMO", "SPECIAL", "WELCOME", "VIP", "FLASH", "HOLIDAY", "SUMMER",
    "WINTER", "SPRING", "FALL", "BLACK", "CYBER",
];

/// Payment methods with relative weights (not percentages).
pub const PAYMENT_METHODS: &[(&str, u32)] = &[
    ("credit_card", 35),
    ("debit_card", 20),
    ("paypal", 20),
    ("apple_pay", 10),
    ("google_pay", 8),
    ("bank_transfer", 5),
    ("gift_card", 2),
];

pub const CARD_TYPES: &[&str] = &["Visa", "Mastercard", "American Express", "Discover"];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "protonmail.com",
];

pub const BRAND_COUNTRIES: &[&str] = &[
    "USA",
    "Japan",
    "Germany",
    "South Korea",
    "France",
    "Italy",
    "UK",
    "Sweden",
    "China",
];

pub const PREFERRED_LANGUAGES: &[&str] = &["en", "es", "fr", "de", "zh", "ja", "pt"];

// Review phrase banks for sentiment-aware generation.

pub const POSITIVE_PHRASES: &[&str] = &[
    "Absolutely love this product!",
    "Best purchase I've made this year.",
    "Exceeded my expectations.",
    "Great quality for the price.",
    "Would definitely recommend.",
    "Perfect for everyday use.",
    "Amazing value!",
    "Exactly what I was looking for.",
];

pub const NEUTRAL_PHRASES: &[&str] = &[
    "It's okay, nothing special.",
    "Decent product for the price.",
    "Does what it's supposed to do.",
    "Average quality.",
    "Met my basic expectations.",
    "Good but could be better.",
];

pub const NEGATIVE_PHRASES: &[&str] = &[
    "Not worth the money.",
    "Disappointed with the quality.",
    "Would not recommend.",
    "Did not meet expectations.",
    "Had issues from the start.",
    "Returning this product.",
];

/// Target row counts per entity type.
#[derive(Debug, Clone, Copy)]
pub struct SizePreset {
    pub customers: u64,
    pub products: u64,
    pub orders: u64,
    pub reviews: u64,
    pub wishlists: u64,
    pub coupons: u64,
}

pub const PRESET_QUICK: SizePreset = SizePreset {
    customers: 100,
    products: 50,
    orders: 300,
    reviews: 200,
    wishlists: 100,
    coupons: 20,
};

pub const PRESET_DEFAULT: SizePreset = SizePreset {
    customers: 100_000,
    products: 5_000,
    orders: 500_000,
    reviews: 200_000,
    wishlists: 50_000,
    coupons: 500,
};

pub const PRESET_XL: SizePreset = SizePreset {
    customers: 1_000_000,
    products: 50_000,
    orders: 5_000_000,
    reviews: 2_000_000,
    wishlists: 500_000,
    coupons: 2_000,
};

pub const PRESET_XXL: SizePreset = SizePreset {
    customers: 1_000_000,
    products: 100_000,
    orders: 40_000_000,
    reviews: 8_000_000,
    wishlists: 500_000,
    coupons: 2_000,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(!CATALOG.is_empty());
        for category in CATALOG {
            assert!(!category.brands.is_empty(), "{} has no brands", category.name);
            assert!(
                !category.products.is_empty(),
                "{} has no products",
                category.name
            );
            for template in category.products {
                assert!(
                    template.min_price <= template.max_price,
                    "bad price range for {}",
                    template.name
                );
            }
        }
    }

    #[test]
    fn test_warehouse_codes_unique() {
        let mut codes: Vec<_> = WAREHOUSES.iter().map(|w| w.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), WAREHOUSES.len());
    }
}
