//! Static page content: header, hero, stats strip and footer.

pub const BRAND: &str = "StyleHub";

/// Count shown on the wishlist badge in the header.
pub const WISHLIST_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Products", href: "#products" },
    NavLink { label: "Categories", href: "#categories" },
    NavLink { label: "Newsletter", href: "#newsletter" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

pub const HERO: HeroContent = HeroContent {
    title: "Discover Your Style",
    subtitle: "Premium fashion for the modern you",
    primary_action: "Shop Now",
    secondary_action: "Learn More",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    TrendingUp,
    ShoppingBag,
    Star,
}

impl StatIcon {
    /// Glyph rendered inside the stat's badge.
    pub fn glyph(self) -> &'static str {
        match self {
            StatIcon::TrendingUp => "📈",
            StatIcon::ShoppingBag => "🛍",
            StatIcon::Star => "★",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: StatIcon,
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { icon: StatIcon::TrendingUp, value: "10K+", label: "Happy Customers" },
    Stat { icon: StatIcon::ShoppingBag, value: "500+", label: "Products" },
    Stat { icon: StatIcon::Star, value: "4.9", label: "Average Rating" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_TAGLINE: &str = "Your destination for premium fashion and lifestyle products.";

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn { title: "Shop", links: &["Men", "Women", "Accessories", "Sale"] },
    FooterColumn { title: "Company", links: &["About Us", "Contact", "Careers", "Blog"] },
    FooterColumn { title: "Support", links: &["FAQ", "Shipping", "Returns", "Privacy"] },
];

pub const COPYRIGHT: &str = "© 2025 StyleHub. All rights reserved.";
