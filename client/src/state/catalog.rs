//! Static flooring catalog: category cards and per-category product pages.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Homogeneous,
    Heterogeneous,
    Sports,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Homogeneous, Self::Heterogeneous, Self::Sports];

    /// Route segment under `/products/`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Homogeneous => "homogeneous",
            Self::Heterogeneous => "heterogeneous",
            Self::Sports => "sports",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug().eq_ignore_ascii_case(slug))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Homogeneous => "Homogeneous",
            Self::Heterogeneous => "Heterogeneous",
            Self::Sports => "Sports",
        }
    }

    pub fn href(self) -> String {
        format!("/products/{}", self.slug())
    }
}

// =============================================================================
// CATEGORY CARDS
// =============================================================================

pub struct CategoryCard {
    pub title: &'static str,
    pub category: Category,
    /// `None` renders the court emoji tile.
    pub image: Option<&'static str>,
}

pub const CARDS: [CategoryCard; 3] = [
    CategoryCard {
        title: "Homogeneous Flooring",
        category: Category::Homogeneous,
        image: Some("https://images.pexels.com/photos/7534211/pexels-photo-7534211.jpeg"),
    },
    CategoryCard {
        title: "Heterogeneous Flooring",
        category: Category::Heterogeneous,
        image: Some("https://images.pexels.com/photos/4483773/pexels-photo-4483773.jpeg"),
    },
    CategoryCard { title: "Sports Flooring", category: Category::Sports, image: None },
];

/// Tab filter: `None` is "all".
pub fn filter_cards(tab: Option<Category>, search: &str) -> Vec<&'static CategoryCard> {
    let needle = search.trim().to_lowercase();
    CARDS
        .iter()
        .filter(|card| tab.is_none_or(|t| t == card.category))
        .filter(|card| card.title.to_lowercase().contains(&needle))
        .collect()
}

// =============================================================================
// PRODUCT PAGES
// =============================================================================

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Swatch {
    pub code: &'static str,
    pub image: &'static str,
}

pub struct SpecTable {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

pub struct ProductPage {
    pub category: Category,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [Feature],
    pub swatches: &'static [Swatch],
    pub applications: &'static [&'static str],
    pub specs: SpecTable,
}

impl ProductPage {
    /// Swatch shown as selected before the visitor picks one.
    pub fn default_swatch(&self) -> Option<&'static str> {
        self.swatches.first().map(|s| s.code)
    }
}

const APPLICATIONS: &[&str] = &["Healthcare", "Education", "Office", "Shopping Mall", "Transportation", "Factories"];

const SPEC_HEADERS: &[&str] = &["Description", "Standard", "Unit", "Result"];

static HOMOGENEOUS: ProductPage = ProductPage {
    category: Category::Homogeneous,
    title: "Homogeneous Flooring",
    subtitle: "Homogeneous vinyl flooring delivers unified composition for long-lasting performance, \
               easy upkeep, and refined aesthetics across high-traffic spaces.",
    features: &[
        Feature { icon: "🛡️", title: "Durability", description: "Built for heavy traffic zones." },
        Feature { icon: "🧼", title: "Maintenance", description: "Easy cleaning and care." },
        Feature { icon: "🦶", title: "Slip Resistance", description: "Stable footing in motion." },
        Feature { icon: "🧪", title: "Chemical Resistance", description: "Resists everyday spills." },
        Feature { icon: "🔥", title: "Fire Safety", description: "Engineered for safety." },
        Feature { icon: "🧴", title: "Hygienic", description: "Seamless, germ-resistant." },
        Feature { icon: "🧩", title: "Easy Installation", description: "Fast, efficient fit." },
        Feature { icon: "🌿", title: "Eco-Friendly", description: "Responsible material choices." },
    ],
    swatches: &[
        Swatch { code: "FE-25024", image: "https://5.imimg.com/data5/OV/ND/GO/SELLER-2156888/hospital-flooring.jpg" },
        Swatch { code: "FE-25034", image: "https://www.greatmats.com/images/lonseal/loneco-topseal-install-12.jpg.webp" },
        Swatch {
            code: "FE-25047",
            image: "https://www.firstpointflooring.co.uk/hubfs/benefits-of-an-optimal-industrial-linoleum-flooring-for-hospitals.jpg",
        },
        Swatch {
            code: "FE-25063",
            image: "https://www.constructionspecifier.com/wp-content/uploads/2024/08/online-Lino_HE_056_625_911_RS_HR.jpg",
        },
    ],
    applications: APPLICATIONS,
    specs: SpecTable {
        title: "Technical Specifications",
        headers: SPEC_HEADERS,
        rows: &[
            &["Type", "EN 649", "-", "Homogeneous vinyl"],
            &["Total thickness", "EN 428", "mm", "2.0"],
            &["Width", "EN 426", "m", "2.0"],
            &["Length", "EN 426", "m", "20"],
            &["Weight", "EN 430", "kg/m²", "2.9"],
            &["Fire rating", "EN 13501-1", "-", "Bfl-s1"],
            &["Slip resistance (dry)", "DIN 51130", "-", "R9"],
            &["Slip resistance (wet)", "EN 13893", "-", "DS"],
            &["Electrical resistance", "EN 1815", "kV", "≤ 2"],
            &["Hygiene", "ISO 846", "-", "Anti-bacterial"],
            &["Surface treatment", "Factory", "-", "PUR"],
            &["Dimensional stability", "EN 434", "%", "≤ 0.4"],
        ],
    },
};

static HETEROGENEOUS: ProductPage = ProductPage {
    category: Category::Heterogeneous,
    title: "Heterogeneous Flooring",
    subtitle: "Heterogeneous vinyl flooring combines multi-layer construction with design versatility, \
               dependable durability, and easy care for hospitals, schools, and commercial interiors.",
    features: &[
        Feature { icon: "🛡️", title: "Durable Wear Layer", description: "Built for heavy traffic wear." },
        Feature { icon: "🧼", title: "Easy Maintenance", description: "Simple cleaning routines." },
        Feature { icon: "🦶", title: "Slip Resistance", description: "Confident footing daily." },
        Feature { icon: "🧪", title: "Chemical Resistance", description: "Resists common spills." },
        Feature { icon: "🧴", title: "Hygienic Surface", description: "Seamless, clean finish." },
        Feature { icon: "🎨", title: "Modern Design Range", description: "Versatile patterns & tones." },
    ],
    swatches: &[
        Swatch {
            code: "HE-24022",
            image: "https://www.responsiveindustries.com/wp-content/uploads/2019/03/SPRQ-12_ArcticAzure-full.jpg",
        },
        Swatch {
            code: "HE-24033",
            image: "https://ecdn6.globalso.com/upload/p/3884/image_product/2025-04/67f87d90e222632889.jpg",
        },
        Swatch {
            code: "HE-24044",
            image: "https://d2yrl9qa73wml8.cloudfront.net/Y15966O0N/conversions/Vinyl-Flooring1-size_500_500.webp",
        },
    ],
    applications: APPLICATIONS,
    specs: SpecTable {
        title: "Technical Specifications",
        headers: SPEC_HEADERS,
        rows: &[
            &["Total thickness", "EN 428", "mm", "2.0"],
            &["Wear layer thickness", "EN 429", "mm", "0.7"],
            &["Commercial use", "EN 685", "-", "Class 34"],
            &["Industrial use", "EN 685", "-", "Class 43"],
            &["Roll width", "EN 426", "m", "2.0"],
            &["Roll length", "EN 426", "m", "≤ 25"],
            &["Total weight", "EN 430", "g/m²", "ca. 2750"],
            &["Dimensional stability", "EN 434", "%", "≤ 0.20"],
            &["Residual indentation", "EN 433", "mm", "≤ 0.10"],
            &["Light fastness", "EN ISO 105-B02", "-", "≥ 6"],
            &["Slip resistance", "DIN 51130", "-", "R10"],
            &["Reaction to fire", "EN 13501-1", "-", "Bfl-s1"],
            &["Thermal conductivity", "EN 12667", "W/m·K", "0.25"],
        ],
    },
};

static SPORTS: ProductPage = ProductPage {
    category: Category::Sports,
    title: "Sports Flooring",
    subtitle: "Designed for indoor courts, gyms, and multipurpose halls, sports flooring delivers durability, \
               slip resistance, and shock absorption to support athlete safety and performance.",
    features: &[
        Feature { icon: "🧘", title: "Shock Absorption", description: "Cushioned layers reduce impact." },
        Feature { icon: "🦶", title: "Slip Resistance", description: "Stable grip under motion." },
        Feature { icon: "✨", title: "Seamless Finish", description: "Clean, unified surface." },
        Feature { icon: "🧼", title: "Easy Maintenance", description: "Simple daily upkeep." },
        Feature { icon: "🛡️", title: "Durability", description: "Built for heavy use." },
        Feature { icon: "🏀", title: "Ball Bounce Consistency", description: "Reliable play response." },
        Feature { icon: "🔇", title: "Noise Reduction", description: "Lower impact sound." },
    ],
    swatches: &[],
    applications: &["Indoor Courts", "Gyms", "Multipurpose Halls", "Schools"],
    specs: SpecTable {
        title: "Performance Characteristics",
        headers: &["Description", "Test Method", "4.5 mm", "6.5 mm"],
        rows: &[
            &["Thickness", "EN 428", "4.50 mm", "6.50 mm"],
            &["Roll Dimension", "EN 426", "1.8 mtr × 15 linear mtr", "1.8 mtr × 15 linear mtr"],
            &["Total Weight", "EN 430", "3.3 kg/sq.m", "4.3 kg/sq.m"],
            &["Thickness of Wear Layer", "EN 429", "0.70 mm", "1.00 mm"],
            &["Dimensional Stability", "EN 434", "≤ 0.10%", "≤ 0.10%"],
            &["Residual Indentation After Static Load", "EN 433", "≤ 0.40 mm", "≤ 0.40 mm"],
            &["Abrasion Resistance", "EN 660-2", "Wear Group T", "Wear Group T"],
            &["Slip Resistance", "DIN 51130", "R9", "R9"],
            &["Sound Absorption", "ISO 140-8 / EN ISO 717-2", "ΔLW = 18 dB", "ΔLW = 24 dB"],
            &["Surface Protection", "—", "PUR", "PUR"],
        ],
    },
};

pub fn product_page(category: Category) -> &'static ProductPage {
    match category {
        Category::Homogeneous => &HOMOGENEOUS,
        Category::Heterogeneous => &HETEROGENEOUS,
        Category::Sports => &SPORTS,
    }
}
