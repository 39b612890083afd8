//! The demo catalogue.

use sickfits_models::ProductStatus;

/// Seed data for one product and its photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub status: ProductStatus,
    /// Price in cents
    pub price: i32,
    pub image: &'static str,
    pub alt_text: &'static str,
}

const fn product(
    name: &'static str,
    description: &'static str,
    price: i32,
    image: &'static str,
) -> ProductSeed {
    ProductSeed {
        name,
        description,
        status: ProductStatus::Available,
        price,
        image,
        alt_text: name,
    }
}

const CATALOGUE: &[ProductSeed] = &[
    product(
        "Yeti Hondo",
        "A soft, oversized hoodie for cold mornings.",
        3423,
        "/static/products/yeti-hondo.jpg",
    ),
    product(
        "Airmax 270",
        "Everyday trainers with a big air unit in the heel.",
        5234,
        "/static/products/airmax-270.jpg",
    ),
    product(
        "KITH Hoodie",
        "Heavyweight fleece, boxy fit.",
        23562,
        "/static/products/kith-hoodie.jpg",
    ),
    product(
        "Fanorak",
        "Half-zip anorak that packs into its own pocket.",
        252342,
        "/static/products/fanorak.jpg",
    ),
    product(
        "Nike Vapormax",
        "Lightweight runners with a full-length air sole.",
        83456,
        "/static/products/nike-vapormax.jpg",
    ),
    product(
        "Goose Knit Jacket",
        "Chunky knit with a shawl collar.",
        62312,
        "/static/products/goose-knit-jacket.jpg",
    ),
    product(
        "Ultraboost",
        "Springy knit sneakers for long walks.",
        10232,
        "/static/products/ultraboost.jpg",
    ),
    product(
        "Blue Suede Shoes",
        "Classic suede lace-ups in cobalt.",
        4892,
        "/static/products/blue-suede-shoes.jpg",
    ),
    product(
        "Rimowa Luggage",
        "Grooved aluminium carry-on.",
        47843,
        "/static/products/rimowa-luggage.jpg",
    ),
    product(
        "Black Hole Sun",
        "Graphic tee, garment dyed.",
        4234,
        "/static/products/black-hole-sun.jpg",
    ),
];

pub fn seed_products() -> Vec<ProductSeed> {
    CATALOGUE.to_vec()
}
